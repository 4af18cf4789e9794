use weft_graphlib::{
    AdjacencyIndex, CancelFlag, Error, Link, LinkId, Network, Node, NodeId, Progress, Unmonitored,
};

fn nodes(names: &[&str]) -> Vec<Node> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Node::new(i as u64, *name))
        .collect()
}

#[test]
fn undirected_links_are_traversable_from_either_endpoint() {
    let net = Network::new(
        nodes(&["a", "b", "c"]),
        vec![Link::undirected(0, 1, "pp"), Link::directed(1, 2, "pd")],
    )
    .unwrap();
    let adj = AdjacencyIndex::build(&net);

    assert_eq!(adj.outgoing(0), &[LinkId(0)]);
    assert_eq!(adj.outgoing(1), &[LinkId(0), LinkId(1)]);
    assert_eq!(adj.outgoing(2), &[] as &[LinkId]);
    assert_eq!(adj.incoming(0), &[LinkId(0)]);
    assert_eq!(adj.incoming(2), &[LinkId(1)]);

    let succ: Vec<usize> = adj.successors(&net, 1).collect();
    assert_eq!(succ, vec![0, 2]);
}

#[test]
fn directed_out_skips_undirected_and_feedback_links() {
    let net = Network::new(
        nodes(&["a", "b"]),
        vec![
            Link::directed(0, 1, "pd"),
            Link::undirected(0, 1, "pp"),
            Link::directed(0, 0, "self"),
        ],
    )
    .unwrap();
    let adj = AdjacencyIndex::build(&net);
    assert_eq!(adj.directed_out(0), &[LinkId(0)]);
    assert!(adj.directed_out(1).is_empty());
}

#[test]
fn shadow_links_are_left_out_of_the_index() {
    let net = Network::with_shadows(nodes(&["a", "b"]), vec![Link::undirected(0, 1, "pp")]).unwrap();
    assert_eq!(net.link_count(), 2);
    assert_eq!(net.non_shadow_link_count(), 1);

    let adj = AdjacencyIndex::build(&net);
    assert_eq!(adj.outgoing(0), &[LinkId(0)]);
    assert_eq!(adj.degree(0), 1);
    assert_eq!(adj.degree(1), 1);
}

#[test]
fn degree_counts_incoming_and_outgoing_links() {
    let net = Network::new(
        nodes(&["a", "b", "c"]),
        vec![
            Link::directed(0, 1, "r"),
            Link::directed(0, 2, "r"),
            Link::directed(2, 2, "r"),
        ],
    )
    .unwrap();
    let adj = AdjacencyIndex::build(&net);
    assert_eq!(adj.degree(0), 2);
    assert_eq!(adj.degree(1), 1);
    assert_eq!(adj.in_degree(2), 2);
    assert_eq!(adj.out_degree(2), 1);
}

#[test]
fn roots_ignore_feedback_links() {
    let net = Network::new(
        nodes(&["a", "b", "c"]),
        vec![Link::directed(0, 1, "r"), Link::directed(2, 2, "r")],
    )
    .unwrap();
    let adj = AdjacencyIndex::build(&net);
    assert_eq!(adj.roots(), vec![0, 2]);
}

#[test]
fn network_rejects_links_to_unknown_nodes() {
    let err = Network::new(nodes(&["a"]), vec![Link::directed(0, 9, "r")]).unwrap_err();
    assert_eq!(
        err,
        Error::MissingEndpoint {
            link: 0,
            node: NodeId(9)
        }
    );
}

#[test]
fn network_rejects_duplicate_node_ids() {
    let err = Network::new(vec![Node::new(1, "a"), Node::new(1, "b")], Vec::new()).unwrap_err();
    assert_eq!(err, Error::DuplicateNode(NodeId(1)));
}

#[test]
fn natural_order_sorts_by_name_then_id() {
    let net = Network::new(
        vec![Node::new(5, "b"), Node::new(3, "a"), Node::new(1, "b")],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(net.natural_order(), vec![1, 2, 0]);
    assert_eq!(net.natural_rank(), vec![2, 0, 1]);
}

#[test]
fn with_shadows_skips_directed_and_feedback_links() {
    let net = Network::with_shadows(
        nodes(&["a", "b"]),
        vec![
            Link::directed(0, 1, "pd"),
            Link::undirected(1, 1, "pp"),
            Link::undirected(0, 1, "pp"),
        ],
    )
    .unwrap();
    assert_eq!(net.link_count(), 4);
    let shadows: Vec<&Link> = net.links().iter().filter(|l| l.shadow).collect();
    assert_eq!(shadows.len(), 1);
    assert!(shadows[0].is_shadow_pair(&net.links()[2]));
}

#[test]
fn monitored_build_matches_the_plain_build() {
    let net = Network::with_shadows(
        nodes(&["a", "b", "c"]),
        vec![Link::undirected(0, 1, "pp"), Link::directed(1, 2, "pd")],
    )
    .unwrap();
    let plain = AdjacencyIndex::build(&net);
    let mut monitor = Unmonitored;
    let monitored =
        AdjacencyIndex::build_monitored(&net, &mut Progress::new(&mut monitor)).unwrap();
    for ix in 0..net.node_count() {
        assert_eq!(plain.outgoing(ix), monitored.outgoing(ix));
        assert_eq!(plain.incoming(ix), monitored.incoming(ix));
        assert_eq!(plain.degree(ix), monitored.degree(ix));
    }
}

#[test]
fn monitored_build_stops_when_cancelled() {
    let net = Network::new(nodes(&["a", "b"]), vec![Link::directed(0, 1, "pd")]).unwrap();
    let mut flag = CancelFlag::new();
    flag.cancel();
    let mut progress = Progress::new(&mut flag).with_interval(1);
    let err = AdjacencyIndex::build_monitored(&net, &mut progress).unwrap_err();
    assert_eq!(err, Error::Cancelled);
}

#[test]
fn link_ids_run_in_both_directions() {
    let net = Network::new(
        nodes(&["a", "b"]),
        vec![Link::directed(0, 1, "x"), Link::directed(1, 0, "y")],
    )
    .unwrap();
    assert_eq!(net.link_ids().len(), 2);
    assert_eq!(net.link_ids().rev().collect::<Vec<_>>(), vec![LinkId(1), LinkId(0)]);
}
