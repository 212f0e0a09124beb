use kurbo::{PathEl, Shape};

use super::*;

fn end_point(path: &BezPath) -> Point {
    match path.elements().last().unwrap() {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => *p,
        PathEl::QuadTo(_, p) => *p,
        PathEl::CurveTo(_, _, p) => *p,
        PathEl::ClosePath => panic!("unexpected close"),
    }
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}

#[test]
fn basis_three_points_matches_b_spline_construction() {
    let a = Point::new(0.0, 0.0);
    let m = Point::new(6.0, 6.0);
    let b = Point::new(12.0, 0.0);
    let path = basis_curve(&[a, m, b]);
    let els = path.elements();

    assert_eq!(els[0], PathEl::MoveTo(a));
    assert_eq!(els[1], PathEl::LineTo(Point::new(1.0, 1.0)));
    match els[2] {
        PathEl::CurveTo(c1, c2, p) => {
            assert!(close(c1, Point::new(2.0, 2.0)));
            assert!(close(c2, Point::new(4.0, 4.0)));
            assert!(close(p, Point::new(6.0, 4.0)));
        }
        ref other => panic!("expected curve, got {other:?}"),
    }
    match els[3] {
        PathEl::CurveTo(c1, c2, p) => {
            assert!(close(c1, Point::new(8.0, 4.0)));
            assert!(close(c2, Point::new(10.0, 2.0)));
            assert!(close(p, Point::new(11.0, 1.0)));
        }
        ref other => panic!("expected curve, got {other:?}"),
    }
    assert_eq!(els[4], PathEl::LineTo(b));
    assert_eq!(els.len(), 5);
}

#[test]
fn basis_degenerate_inputs() {
    assert!(basis_curve(&[]).elements().is_empty());
    assert_eq!(basis_curve(&[Point::new(1.0, 2.0)]).elements().len(), 1);

    let two = basis_curve(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    assert_eq!(
        two.elements(),
        &[
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::LineTo(Point::new(3.0, 4.0))
        ]
    );
}

#[test]
fn semicircle_bulges_above_the_baseline() {
    let from = Point::new(10.0, 100.0);
    let to = Point::new(50.0, 100.0);
    let path = semicircle(from, to);

    assert!(close(end_point(&path), to));
    let bbox = path.bounding_box();
    assert!((bbox.min_y() - 80.0).abs() < 0.5, "top was {}", bbox.min_y());
    assert!(bbox.max_y() <= 100.0 + 0.1);
    assert!((bbox.min_x() - 10.0).abs() < 0.1);
    assert!((bbox.max_x() - 50.0).abs() < 0.1);
}

#[test]
fn semicircle_with_coincident_endpoints_is_a_point() {
    let p = Point::new(5.0, 5.0);
    let path = semicircle(p, p);
    assert_eq!(path.elements(), &[PathEl::MoveTo(p)]);
}

#[test]
fn horizontal_link_controls_share_midpoint_x() {
    let path = horizontal_link(Point::new(0.0, 0.0), Point::new(100.0, 40.0));
    match path.elements()[1] {
        PathEl::CurveTo(c1, c2, p) => {
            assert_eq!(c1, Point::new(50.0, 0.0));
            assert_eq!(c2, Point::new(50.0, 40.0));
            assert_eq!(p, Point::new(100.0, 40.0));
        }
        ref other => panic!("expected curve, got {other:?}"),
    }
}
