//! End-to-end scenarios for building and editing small networks.

use bayesnet_core::{AdjacencyList, Connection, Error, GraphLimits, Handle, Network};
use tracing_subscriber::EnvFilter;

type Node = Handle<&'static str>;
type Arc = Handle<&'static str>;
type Net = AdjacencyList<Node, Arc>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn linear_chain() {
    init_tracing();
    let mut net = Net::new();
    let a = net.add_node(Handle::new("A")).unwrap();
    let b = net.add_node(Handle::new("B")).unwrap();
    let c = net.add_node(Handle::new("C")).unwrap();
    let e1 = net.add_arc(Handle::new("e1"), &a, &b).unwrap();
    let e2 = net.add_arc(Handle::new("e2"), &b, &c).unwrap();

    assert_eq!(net.child_nodes(&a).unwrap(), vec![b.clone()]);
    assert_eq!(net.parent_nodes(&c), vec![b.clone()]);
    assert_eq!(net.is_adjacent(&a, &c), None);

    assert!(net.remove_node(&b));

    let arcs = net.all_arc();
    assert!(!arcs.contains(&e1));
    assert!(!arcs.contains(&e2));
    assert_eq!(net.all_node(), vec![a.clone(), c.clone()]);
    assert!(net.child_nodes(&a).unwrap().is_empty());
    assert!(net.parent_nodes(&c).is_empty());
    assert!(net.check_consistency().is_ok());
}

#[test]
fn remove_nonexistent_on_empty() {
    init_tracing();
    let mut net = Net::new();
    let x = Handle::new("x");

    assert!(!net.remove_node(&x));
    assert!(!net.remove_arc(&x));
    assert!(!net.remove_arc_between(&x, &x));

    assert!(net.is_empty());
    assert!(net.all_node().is_empty());
    assert!(net.all_arc().is_empty());
}

#[test]
fn asia_network() {
    init_tracing();
    let mut net = Net::with_limits(GraphLimits::new().strict());
    let names = ["Asia", "Smoking", "Tuberculosis", "LungCancer", "Bronchitis", "Either", "XRay", "Dyspnea"];
    let n: Vec<Node> = names
        .iter()
        .map(|name| net.add_node(Handle::new(*name)).unwrap())
        .collect();

    let edges = [(0, 2), (1, 3), (1, 4), (2, 5), (3, 5), (5, 6), (5, 7), (4, 7)];
    for (i, (from, to)) in edges.iter().enumerate() {
        let arc = Handle::new(["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7"][i]);
        net.add_arc(arc, &n[*from], &n[*to]).unwrap();
    }

    assert_eq!(net.child_nodes(&n[1]).unwrap(), vec![n[3].clone(), n[4].clone()]);
    assert_eq!(net.parent_nodes(&n[5]), vec![n[2].clone(), n[3].clone()]);
    assert_eq!(net.parent_nodes(&n[7]), vec![n[5].clone(), n[4].clone()]);

    let either_xray = net.is_adjacent(&n[5], &n[6]).unwrap();
    assert_eq!(net.is_connect(&n[5], &either_xray), Connection::Source);
    assert_eq!(net.is_connect(&n[6], &either_xray), Connection::Target);
    assert_eq!(net.is_connect(&n[0], &either_xray), Connection::Unrelated);

    // Drop "Either": both of its parents lose a child, both children lose it
    assert!(net.remove_node(&n[5]));
    assert_eq!(net.arc_count(), 4);
    assert!(net.child_nodes(&n[2]).unwrap().is_empty());
    assert_eq!(net.parent_nodes(&n[7]), vec![n[4].clone()]);
    assert!(net.check_consistency().is_ok());

    let outside = Handle::new("Outside");
    let err = net.add_arc(Handle::new("bad"), &n[0], &outside).unwrap_err();
    assert!(matches!(err, Error::NodeNotRegistered(_)));
    assert_eq!(net.stats().arcs, 4);
}

#[test]
fn container_never_sole_owner() {
    init_tracing();
    let mut net = Net::new();
    let a = net.add_node(Handle::new("A")).unwrap();
    let b = net.add_node(Handle::new("B")).unwrap();
    let e = net.add_arc(Handle::new("e"), &a, &b).unwrap();
    let observer = Handle::downgrade(&e);

    assert!(net.remove_arc(&e));
    assert_eq!(Handle::strong_count(&e), 1);
    assert_eq!(*e, "e");

    drop(net);
    assert_eq!(Handle::strong_count(&a), 1);
    drop(e);
    assert!(observer.upgrade().is_none());
}

#[test]
fn generic_consumers_use_network_trait() {
    fn leaves<G: Network>(net: &G) -> usize {
        net.all_node()
            .iter()
            .filter(|n| net.child_nodes(n).map(|c| c.is_empty()).unwrap_or(false))
            .count()
    }

    let mut net = Net::new();
    let a = net.add_node(Handle::new("A")).unwrap();
    let b = net.add_node(Handle::new("B")).unwrap();
    let c = net.add_node(Handle::new("C")).unwrap();
    net.add_arc(Handle::new("ab"), &a, &b).unwrap();
    net.add_arc(Handle::new("ac"), &a, &c).unwrap();

    assert_eq!(leaves(&net), 2);
}
