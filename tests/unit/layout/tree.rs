use super::*;
use crate::foundation::core::{Item, Pair};

fn dataset(n: u32) -> Dataset {
    let items = (1..=n)
        .map(|id| Item::new(id, format!("v{id}"), format!("t{id}")))
        .collect();
    Dataset::from_items("Test", items)
}

fn opts() -> LayoutOpts {
    LayoutOpts {
        width: 640.0,
        height: 480.0,
    }
}

fn item_children(tree: &Hierarchy, node: usize) -> Vec<usize> {
    tree.children[node]
        .iter()
        .map(|&c| tree.items[c].unwrap())
        .collect()
}

fn node_of(tree: &Hierarchy, item: usize) -> usize {
    tree.items.iter().position(|&i| i == Some(item)).unwrap()
}

#[test]
fn odd_length_nests_pairs_with_center_innermost() {
    let tree = build_hierarchy(&dataset(7)).unwrap();
    assert_eq!(tree.len(), 8);
    assert_eq!(item_children(&tree, 0), vec![0, 6]);
    assert_eq!(item_children(&tree, node_of(&tree, 0)), vec![1, 5]);
    assert_eq!(item_children(&tree, node_of(&tree, 1)), vec![2, 4]);
    assert_eq!(item_children(&tree, node_of(&tree, 2)), vec![3]);
    assert!(tree.children[node_of(&tree, 6)].is_empty());
    assert!(tree.children[node_of(&tree, 3)].is_empty());
}

#[test]
fn even_length_has_no_center_child() {
    let tree = build_hierarchy(&dataset(4)).unwrap();
    assert_eq!(tree.len(), 5);
    assert_eq!(item_children(&tree, 0), vec![0, 3]);
    assert_eq!(item_children(&tree, node_of(&tree, 0)), vec![1, 2]);
    assert!(tree.children[node_of(&tree, 1)].is_empty());
}

#[test]
fn single_item_hangs_under_root() {
    let tree = build_hierarchy(&dataset(1)).unwrap();
    assert_eq!(item_children(&tree, 0), vec![0]);
}

#[test]
fn no_pairs_flattens_items_under_root() {
    let mut ds = dataset(3);
    ds.pairs.clear();
    let tree = build_hierarchy(&ds).unwrap();
    assert_eq!(item_children(&tree, 0), vec![0, 1, 2]);
}

#[test]
fn malformed_pairs_do_not_duplicate_nodes() {
    let mut ds = dataset(3);
    ds.pairs = vec![Pair::new(0, 2), Pair::new(0, 1), Pair::new(5, 9)];
    let tree = build_hierarchy(&ds).unwrap();
    assert_eq!(tree.len(), 4);
}

#[test]
fn empty_dataset_reports_message() {
    assert!(build_hierarchy(&dataset(0)).is_none());
    let model = tree_layout(&dataset(0), &opts());
    assert_eq!(model.message.as_deref(), Some(NO_TREE_MESSAGE));
    assert!(model.nodes.is_empty());
}

#[test]
fn depth_runs_left_to_right_within_margins() {
    let ds = dataset(7);
    let model = tree_layout(&ds, &opts());
    assert_eq!(model.nodes.len(), 7);
    // root links included
    assert_eq!(model.links.len(), 7);

    let x_of = |item: usize| model.node_for_item(item).unwrap().center.x;
    assert!(x_of(0) < x_of(1));
    assert!(x_of(1) < x_of(2));
    assert!(x_of(2) < x_of(3));
    assert_eq!(x_of(0), x_of(6));
    assert!((x_of(3) - (640.0 - MARGIN_RIGHT)).abs() < 1e-9);

    for node in &model.nodes {
        assert!(node.center.y >= MARGIN_TOP - 1e-9);
        assert!(node.center.y <= 480.0 - MARGIN_BOTTOM + 1e-9);
    }

    let y_of = |item: usize| model.node_for_item(item).unwrap().center.y;
    assert!(y_of(0) < y_of(6));
}

#[test]
fn labels_point_away_from_children() {
    let model = tree_layout(&dataset(3), &opts());
    let label = |text: &str| model.labels.iter().find(|l| l.text == text).unwrap();
    // item 0 (id 1) has the center as child; item 2 (id 3) is a leaf.
    assert_eq!(label("1").anchor, TextAnchor::End);
    assert_eq!(label("3").anchor, TextAnchor::Start);
}

#[test]
fn nodes_are_colored_by_pair_and_layout_is_repeatable() {
    let ds = dataset(5);
    let model = tree_layout(&ds, &opts());
    assert_eq!(model.node_for_item(4).unwrap().stroke, Some(pair_color(0)));
    assert_eq!(model.node_for_item(2).unwrap().stroke, Some(pair_color(2)));
    assert!(model.links.iter().all(|l| l.stroke == Rgb::GUIDE));
    assert_eq!(model, tree_layout(&ds, &opts()));
}
