use weft::columns::{ColumnAssignment, ColumnRange, Space};
use weft::drain::{defining_node, largest_run_drain_zones, scan_drain_zones};
use weft::graphlib::{Link, LinkId, Network, Node, Progress, Unmonitored};
use weft::links::{default_link_order, manual_link_order};
use weft::Rows;

fn nodes(names: &[&str]) -> Vec<Node> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Node::new(i as u64, *name))
        .collect()
}

fn triangle() -> Network {
    // 0: A-B, 1: A-B shadow, 2: A-C, 3: A-C shadow, 4: B -> C
    Network::with_shadows(
        nodes(&["A", "B", "C"]),
        vec![
            Link::undirected(0, 1, "pp"),
            Link::undirected(0, 2, "pp"),
            Link::directed(1, 2, "pd"),
        ],
    )
    .unwrap()
}

fn columns_for(net: &Network, rows: &Rows, manual: Option<&[Link]>) -> ColumnAssignment {
    let mut monitor = Unmonitored;
    let mut progress = Progress::new(&mut monitor);
    let links = match manual {
        Some(columns) => manual_link_order(net, columns, &mut progress).unwrap(),
        None => default_link_order(net, rows, &mut progress).unwrap(),
    };
    ColumnAssignment::assign(net, rows, &links, 32, &mut progress).unwrap()
}

fn zones(
    net: &Network,
    rows: &Rows,
    columns: &ColumnAssignment,
    space: Space,
    largest_run: bool,
) -> Vec<Vec<ColumnRange>> {
    let mut monitor = Unmonitored;
    let mut progress = Progress::new(&mut monitor);
    let zones = if largest_run {
        largest_run_drain_zones(net, rows, columns, space, &mut progress).unwrap()
    } else {
        scan_drain_zones(net, rows, columns, space, &mut progress).unwrap()
    };
    assert_eq!(zones.space(), space);
    (0..net.node_count())
        .map(|ix| zones.zones(ix).to_vec())
        .collect()
}

fn range(min: usize, max: usize) -> ColumnRange {
    ColumnRange { min, max }
}

#[test]
fn shadow_links_drain_into_their_bottom_node_in_the_shadow_space_only() {
    let net = triangle();
    let rows = Rows::from_order(3, vec![0, 1, 2]);
    assert_eq!(defining_node(&net, &rows, LinkId(0), Space::Shadow), 0);
    assert_eq!(defining_node(&net, &rows, LinkId(1), Space::Shadow), 1);
    assert_eq!(defining_node(&net, &rows, LinkId(1), Space::NonShadow), 0);
    assert_eq!(defining_node(&net, &rows, LinkId(4), Space::Shadow), 1);

    // Reversing the rows swaps top and bottom.
    let rows = Rows::from_order(3, vec![2, 1, 0]);
    assert_eq!(defining_node(&net, &rows, LinkId(0), Space::Shadow), 1);
    assert_eq!(defining_node(&net, &rows, LinkId(1), Space::Shadow), 0);
}

#[test]
fn scan_finds_one_zone_per_node_for_the_default_link_order() {
    let net = triangle();
    let rows = Rows::from_order(3, vec![0, 1, 2]);
    let columns = columns_for(&net, &rows, None);

    assert_eq!(
        zones(&net, &rows, &columns, Space::NonShadow, false),
        vec![vec![range(0, 1)], vec![range(2, 2)], vec![]]
    );
    assert_eq!(
        zones(&net, &rows, &columns, Space::Shadow, false),
        vec![vec![range(0, 1)], vec![range(2, 3)], vec![range(4, 4)]]
    );
}

#[test]
fn scan_reports_every_run_of_a_split_node() {
    let net = triangle();
    let rows = Rows::from_order(3, vec![0, 1, 2]);
    let all = net.links();
    let manual = [
        all[0].clone(),
        all[4].clone(),
        all[2].clone(),
        all[1].clone(),
        all[3].clone(),
    ];
    let columns = columns_for(&net, &rows, Some(&manual));
    assert_eq!(
        zones(&net, &rows, &columns, Space::NonShadow, false),
        vec![vec![range(0, 0), range(2, 2)], vec![range(1, 1)], vec![]]
    );
}

#[test]
fn largest_run_keeps_the_leftmost_of_equally_long_runs() {
    let net = triangle();
    let rows = Rows::from_order(3, vec![0, 1, 2]);
    let all = net.links();
    let manual = [
        all[0].clone(),
        all[4].clone(),
        all[2].clone(),
        all[1].clone(),
        all[3].clone(),
    ];
    let columns = columns_for(&net, &rows, Some(&manual));

    assert_eq!(
        zones(&net, &rows, &columns, Space::Shadow, true),
        vec![vec![range(0, 0)], vec![range(1, 1)], vec![range(4, 4)]]
    );
    assert_eq!(
        zones(&net, &rows, &columns, Space::NonShadow, true),
        vec![vec![range(0, 0)], vec![range(1, 1)], vec![]]
    );
}

#[test]
fn largest_run_prefers_a_longer_later_run() {
    let links = vec![
        Link::directed(0, 1, "d1"),
        Link::directed(0, 2, "d2"),
        Link::directed(1, 2, "d3"),
        Link::directed(0, 1, "d4"),
    ];
    let net = Network::new(nodes(&["A", "B", "C"]), links.clone()).unwrap();
    let rows = Rows::from_order(3, vec![0, 1, 2]);
    let manual = [
        links[0].clone(),
        links[2].clone(),
        links[1].clone(),
        links[3].clone(),
    ];
    let columns = columns_for(&net, &rows, Some(&manual));

    let found = zones(&net, &rows, &columns, Space::NonShadow, true);
    assert_eq!(found[0], vec![range(2, 3)]);
    assert_eq!(found[1], vec![range(1, 1)]);
    assert!(found[2].is_empty());
}

#[test]
fn zones_of_one_node_never_overlap_or_touch() {
    let net = triangle();
    let rows = Rows::from_order(3, vec![1, 0, 2]);
    let columns = columns_for(&net, &rows, None);
    for space in Space::BOTH {
        for node_zones in zones(&net, &rows, &columns, space, false) {
            for pair in node_zones.windows(2) {
                assert!(pair[1].min > pair[0].max + 1, "{pair:?}");
            }
        }
    }
}
