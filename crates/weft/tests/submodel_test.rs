use weft::graphlib::{Link, LinkId, Network, Node, NodeId, Unmonitored};
use weft::{Error, LayoutModel, LayoutOptions, NodeOrderKind, Selection, Space};
use weft::{extract_submodel, layout};

fn triangle() -> Network {
    // 0: A-B, 1: A-B shadow, 2: A-C, 3: A-C shadow, 4: B -> C
    Network::with_shadows(
        vec![Node::new(0, "A"), Node::new(1, "B"), Node::new(2, "C")],
        vec![
            Link::undirected(0, 1, "pp"),
            Link::undirected(0, 2, "pp"),
            Link::directed(1, 2, "pd"),
        ],
    )
    .unwrap()
}

fn full_layout(net: &Network) -> LayoutModel {
    let options = LayoutOptions {
        node_order: NodeOrderKind::Passthrough,
        nodes: vec![NodeId(0), NodeId(1), NodeId(2)],
        ..LayoutOptions::default()
    };
    layout(net, &options, &mut Unmonitored).unwrap()
}

#[test]
fn node_selection_keeps_links_between_selected_nodes() {
    let net = triangle();
    let full = full_layout(&net);
    let selection = Selection {
        nodes: vec![NodeId(2), NodeId(0)],
        links: None,
    };
    let sub = extract_submodel(
        &net,
        &full,
        &selection,
        &LayoutOptions::default(),
        &mut Unmonitored,
    )
    .unwrap();

    assert_eq!(sub.network.node_count(), 2);
    assert_eq!(sub.layout.node_order(), vec![NodeId(0), NodeId(2)]);
    assert_eq!(sub.network.link_count(), 2);
    assert!(!sub.network.links()[0].shadow);
    assert!(sub.network.links()[1].shadow);
    assert_eq!(
        sub.layout.link_order(Space::Shadow),
        &[LinkId(0), LinkId(1)]
    );
    assert_eq!(sub.layout.link_order(Space::NonShadow), &[LinkId(0)]);
    assert_eq!(sub.layout.columns().to_shadow(0), Some(0));
}

#[test]
fn sub_model_keeps_relative_row_and_column_order() {
    let net = triangle();
    let full = full_layout(&net);
    let selection = Selection {
        nodes: vec![NodeId(0), NodeId(1), NodeId(2)],
        links: None,
    };
    let sub = extract_submodel(
        &net,
        &full,
        &selection,
        &LayoutOptions::default(),
        &mut Unmonitored,
    )
    .unwrap();

    assert_eq!(sub.layout.node_order(), full.node_order());
    let full_links: Vec<&Link> = full
        .link_order(Space::Shadow)
        .iter()
        .map(|id| &net.links()[id.0])
        .collect();
    let sub_links: Vec<&Link> = sub
        .layout
        .link_order(Space::Shadow)
        .iter()
        .map(|id| &sub.network.links()[id.0])
        .collect();
    assert_eq!(sub_links, full_links);
}

#[test]
fn link_selection_pulls_in_endpoints_and_shadow_partner() {
    let net = triangle();
    let full = full_layout(&net);
    let selection = Selection {
        nodes: Vec::new(),
        links: Some(vec![LinkId(2)]),
    };
    let sub = extract_submodel(
        &net,
        &full,
        &selection,
        &LayoutOptions::default(),
        &mut Unmonitored,
    )
    .unwrap();

    assert!(sub.network.has_node(NodeId(0)));
    assert!(sub.network.has_node(NodeId(2)));
    assert!(!sub.network.has_node(NodeId(1)));
    assert_eq!(sub.network.link_count(), 2);
    let shadows = sub.network.links().iter().filter(|l| l.shadow).count();
    assert_eq!(shadows, 1);
    assert_eq!(sub.network.shadow_link_count(), 2);
}

#[test]
fn link_selection_without_the_partner_between_the_nodes_keeps_only_the_link() {
    let net = triangle();
    let full = full_layout(&net);
    let selection = Selection {
        nodes: Vec::new(),
        links: Some(vec![LinkId(4)]),
    };
    let sub = extract_submodel(
        &net,
        &full,
        &selection,
        &LayoutOptions::default(),
        &mut Unmonitored,
    )
    .unwrap();
    assert_eq!(sub.network.node_count(), 2);
    assert_eq!(sub.network.link_count(), 1);
}

#[test]
fn unknown_selection_entries_are_errors() {
    let net = triangle();
    let full = full_layout(&net);
    for selection in [
        Selection {
            nodes: vec![NodeId(42)],
            links: None,
        },
        Selection {
            nodes: Vec::new(),
            links: Some(vec![LinkId(42)]),
        },
    ] {
        let err = extract_submodel(
            &net,
            &full,
            &selection,
            &LayoutOptions::default(),
            &mut Unmonitored,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Graph(_)), "{err:?}");
    }
}

#[test]
fn extraction_stops_when_cancelled_while_selecting() {
    let net = triangle();
    let full = full_layout(&net);
    let selection = Selection {
        nodes: vec![NodeId(0), NodeId(2)],
        links: None,
    };
    let options = LayoutOptions {
        progress_interval: 1,
        ..LayoutOptions::default()
    };
    let mut stages: Vec<&'static str> = Vec::new();
    let mut monitor = |stage: &'static str, _done: usize, _total: usize| {
        stages.push(stage);
        stage != "submodel_candidates"
    };
    let err = extract_submodel(&net, &full, &selection, &options, &mut monitor).unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(stages.last(), Some(&"submodel_candidates"));
    assert!(stages.contains(&"submodel_selection"));
}
