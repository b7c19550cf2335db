//! Identity handles for network components (nodes and arcs)

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

/// Bound for anything the container can store as a node or arc identity.
///
/// The container only clones, compares and hashes its components. It never
/// looks at a payload.
pub trait Component: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Component for T {}

/// Shared handle compared by identity, not by value.
///
/// Two handles are equal only if they point at the same allocation, so two
/// random variables with identical metadata remain distinct nodes. Cloning a
/// handle adds an owner; the payload is dropped when the last owner goes away,
/// whether or not a container still references it through a [`WeakHandle`].
pub struct Handle<T: ?Sized>(Arc<T>);

impl<T> Handle<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Handle<T> {
    /// Number of strong owners, including this one.
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.0)
    }

    /// Non-owning observer of the same component.
    pub fn downgrade(this: &Self) -> WeakHandle<T> {
        WeakHandle(Arc::downgrade(&this.0))
    }

    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> Eq for Handle<T> {}

impl<T: ?Sized> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<T: ?Sized> std::ops::Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:p}", &*self.0, self.addr())
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Non-owning observer of a [`Handle`].
pub struct WeakHandle<T: ?Sized>(Weak<T>);

impl<T: ?Sized> WeakHandle<T> {
    /// Recover a strong handle if some owner still holds the component.
    pub fn upgrade(&self) -> Option<Handle<T>> {
        self.0.upgrade().map(Handle)
    }
}

impl<T: ?Sized> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        Self(Weak::clone(&self.0))
    }
}

impl<T: ?Sized> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(weak)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_not_value() {
        let a = Handle::new("rain");
        let b = Handle::new("rain");

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(Handle::ptr_eq(&a, &a.clone()));

        let set: HashSet<_> = [a.clone(), b.clone(), a.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_strong_count_tracks_owners() {
        let a = Handle::new(1u32);
        assert_eq!(Handle::strong_count(&a), 1);

        let b = a.clone();
        assert_eq!(Handle::strong_count(&a), 2);

        drop(b);
        assert_eq!(Handle::strong_count(&a), 1);
    }

    #[test]
    fn test_weak_handle_does_not_keep_alive() {
        let a = Handle::new(String::from("sprinkler"));
        let weak = Handle::downgrade(&a);

        assert_eq!(weak.upgrade(), Some(a.clone()));
        drop(a);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_display_shows_payload() {
        let a = Handle::new("wet_grass");
        assert_eq!(a.to_string(), "wet_grass");
        assert_eq!(*a, "wet_grass");
    }
}
