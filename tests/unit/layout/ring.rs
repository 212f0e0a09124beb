use super::*;
use crate::foundation::core::{Item, Pair};

fn dataset(n: u32) -> Dataset {
    let items = (1..=n)
        .map(|id| Item::new(id, format!("verse {id}"), format!("translation {id}")))
        .collect();
    Dataset::from_items("Test", items)
}

fn opts() -> LayoutOpts {
    LayoutOpts {
        width: 400.0,
        height: 300.0,
    }
}

#[test]
fn items_sit_on_the_circle_clockwise_from_top() {
    let model = ring_layout(&dataset(4), &opts());
    let center = Point::new(200.0, 150.0);
    let r = 300.0 / 2.0 - MARGIN;

    assert_eq!(model.nodes.len(), 4);
    let p0 = model.nodes[0].center;
    assert!((p0.x - 200.0).abs() < 1e-9);
    assert!((p0.y - (150.0 - r)).abs() < 1e-9);

    let p1 = model.nodes[1].center;
    assert!((p1.x - (200.0 + r)).abs() < 1e-9);
    assert!((p1.y - 150.0).abs() < 1e-9);

    for node in &model.nodes {
        assert!(((node.center - center).hypot() - r).abs() < 1e-9);
    }
}

#[test]
fn angles_are_evenly_spaced() {
    assert_eq!(ring_angle(0, 7), 0.0);
    assert!((ring_angle(1, 4) - TAU / 4.0).abs() < 1e-12);
    assert_eq!(ring_angle(0, 0), 0.0);
}

#[test]
fn one_link_per_pair_colored_by_pair_index() {
    let ds = dataset(7);
    let model = ring_layout(&ds, &opts());
    assert_eq!(model.links.len(), ds.pairs.len());
    for (k, link) in model.links.iter().enumerate() {
        assert_eq!(link.pair, Some(k));
        assert_eq!(link.stroke, pair_color(k));
        assert_eq!(link.opacity, 0.6);
    }
    // Items 0 and 6 share pair 0's color.
    assert_eq!(model.nodes[0].stroke, Some(pair_color(0)));
    assert_eq!(model.nodes[6].stroke, Some(pair_color(0)));
    assert_eq!(model.nodes[3].stroke, Some(pair_color(3)));
}

#[test]
fn pair_curves_bow_toward_the_center() {
    use kurbo::Shape;

    let ds = dataset(2);
    let model = ring_layout(&ds, &opts());
    let link = &model.links[0];
    let bbox = link.path.bounding_box();
    // Items 0 (top) and 1 (bottom) are diametrically opposite; the curve stays inside the ring.
    let r = 300.0 / 2.0 - MARGIN;
    assert!(bbox.min_y() >= 150.0 - r - 1e-9);
    assert!(bbox.max_y() <= 150.0 + r + 1e-9);
}

#[test]
fn unmatched_items_have_no_stroke() {
    let mut ds = dataset(3);
    ds.pairs = vec![Pair::new(0, 2)];
    let model = ring_layout(&ds, &opts());
    assert_eq!(model.nodes[1].stroke, None);
    assert_eq!(model.nodes[0].stroke, Some(pair_color(0)));
}

#[test]
fn labels_use_item_ids_outside_the_ring() {
    let model = ring_layout(&dataset(3), &opts());
    let texts: Vec<&str> = model.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
    let r = 300.0 / 2.0 - MARGIN;
    assert!((model.labels[0].pos.y - (150.0 - r - LABEL_OFFSET)).abs() < 1e-9);
}

#[test]
fn empty_dataset_and_idempotence() {
    let empty = ring_layout(&dataset(0), &opts());
    assert!(empty.nodes.is_empty() && empty.links.is_empty());

    let ds = dataset(9);
    assert_eq!(ring_layout(&ds, &opts()), ring_layout(&ds, &opts()));
}
