use super::*;
use crate::helpers::models::{create_ring_graph, create_square_graph};

fn create_two_nodes_graph() -> Graph {
    let mut graph = Graph::new();

    graph.add_node("a", 0., 0.).unwrap();
    graph.add_node("b", 3., 4.).unwrap();

    graph
}

#[test]
fn can_add_link_in_both_directions() {
    let mut graph = create_two_nodes_graph();

    graph.add_link("a", "b", 5.).unwrap();

    let forward = graph.link("a", "b").unwrap();
    let backward = graph.link("b", "a").unwrap();
    assert_eq!(forward.origin.label(), "a");
    assert_eq!(forward.destination.label(), "b");
    assert_eq!(backward.origin.label(), "b");
    assert_eq!(backward.destination.label(), "a");
    assert_eq!(forward.weight, 5.);
    assert_eq!(backward.weight, 5.);
    assert_ne!(forward.id, backward.id);
    assert_eq!(forward.pheromone, 0.);
    assert_eq!(graph.links_size(), 2);
}

parameterized_test! {cannot_add_invalid_link, (node_a, node_b), {
    let mut graph = create_two_nodes_graph();
    graph.add_link("a", "b", 5.).unwrap();

    let result = graph.add_link(node_a, node_b, 1.);

    assert!(result.is_err());
    assert_eq!(graph.links_size(), 2);
}}

cannot_add_invalid_link! {
    case_01_unknown_origin: ("x", "b"),
    case_02_unknown_destination: ("a", "x"),
    case_03_self_link: ("a", "a"),
    case_04_duplicate: ("a", "b"),
    case_05_duplicate_reversed: ("b", "a"),
}

#[test]
fn cannot_add_duplicate_node() {
    let mut graph = create_two_nodes_graph();

    let result = graph.add_node("a", 1., 1.);

    assert_eq!(result.err().map(|err| err.to_string()), Some("node 'a' already exists".to_string()));
    assert_eq!(graph.size(), 2);
}

#[test]
fn can_return_nothing_for_unknown_lookups() {
    let graph = create_two_nodes_graph();

    assert!(graph.node("x").is_none());
    assert!(graph.link("a", "b").is_none());
    assert!(graph.link("a", "x").is_none());
    assert!(graph.link_by_id(0).is_none());
}

#[test]
fn can_build_complete_graph_from_points() {
    let graph = create_square_graph();

    assert_eq!(graph.size(), 4);
    assert_eq!(graph.links_size(), 12);
    assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    assert!(graph.nodes().iter().all(|node| node.links().len() == 3));
}

#[test]
fn can_use_euclidean_distance_as_symmetric_weight() {
    let graph = create_ring_graph(7, 10.);

    graph.nodes().iter().for_each(|a| {
        graph.nodes().iter().filter(|b| a.label() != b.label()).for_each(|b| {
            let expected = ((a.x() - b.x()).powi(2) + (a.y() - b.y()).powi(2)).sqrt();
            let forward = graph.link(a.label(), b.label()).unwrap().weight;
            let backward = graph.link(b.label(), a.label()).unwrap().weight;

            assert_eq!(forward, backward);
            assert!((forward - expected).abs() < 1E-9);
        });
    });
}

#[test]
fn can_list_links_grouped_by_origin() {
    let graph = create_square_graph();

    let links = graph.links().map(|link| format!("{}{}", link.origin.label(), link.destination.label())).collect::<Vec<_>>();

    assert_eq!(links, vec!["ab", "ac", "ad", "ba", "bc", "bd", "ca", "cb", "cd", "da", "db", "dc"]);
}

#[test]
fn can_keep_trails_isolated_between_copies() {
    let original = create_square_graph();
    let mut copy = original.clone();
    let link_id = copy.link_id(0, 1).unwrap();

    copy.trail_mut(link_id).pheromone = 42.;

    assert!(Arc::ptr_eq(&original.topology, &copy.topology));
    assert_eq!(copy.trail(link_id).pheromone, 42.);
    assert_eq!(original.trail(link_id).pheromone, 0.);
}

#[test]
fn can_copy_topology_on_write() {
    let original = create_square_graph();
    let mut copy = original.clone();

    copy.add_node("e", 2., 2.).unwrap();
    copy.add_link("a", "e", 1.).unwrap();

    assert!(!Arc::ptr_eq(&original.topology, &copy.topology));
    assert_eq!(original.size(), 4);
    assert_eq!(original.links_size(), 12);
    assert_eq!(copy.size(), 5);
    assert_eq!(copy.links_size(), 14);
    assert!(copy.link("e", "a").is_some());
}

#[test]
fn can_calculate_path_length() {
    let graph = create_square_graph();

    assert_eq!(graph.path_length(&[0, 1, 2, 3, 0]), 4.);
    assert!((graph.path_length(&[0, 2, 1, 3, 0]) - (2. + 2. * 2_f64.sqrt())).abs() < 1E-9);
    assert_eq!(graph.path_length(&[0]), 0.);
    assert_eq!(graph.path_length(&[2, 2]), 0.);
    assert_eq!(graph.labels_of(&[0, 3, 0]), vec!["a", "d", "a"]);
}

#[test]
#[should_panic(expected = "graph is expected to be complete")]
fn cannot_calculate_path_length_with_missing_link() {
    let mut graph = create_two_nodes_graph();
    graph.add_node("c", 1., 1.).unwrap();
    graph.add_link("a", "b", 5.).unwrap();

    graph.path_length(&[0, 1, 2, 0]);
}
