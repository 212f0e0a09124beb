//! Path builders shared by the layout transforms.

use kurbo::{Arc, SvgArc};

use crate::foundation::core::{BezPath, Point, Vec2};

/// Uniform cubic B-spline through `points`, clamped to the first and last point.
///
/// Two points give a straight segment; the curve only passes through the endpoints.
pub(crate) fn basis_curve(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);

    let mut p0 = first;
    let Some((&second, rest)) = rest.split_first() else {
        return path;
    };
    let mut p1 = second;

    let mut started = false;
    for &p in rest {
        if !started {
            path.line_to(blend(&[(5.0, p0), (1.0, p1)], 6.0));
            started = true;
        }
        basis_segment(&mut path, p0, p1, p);
        p0 = p1;
        p1 = p;
    }

    if started {
        basis_segment(&mut path, p0, p1, p1);
    }
    path.line_to(p1);
    path
}

fn basis_segment(path: &mut BezPath, p0: Point, p1: Point, p: Point) {
    path.curve_to(
        blend(&[(2.0, p0), (1.0, p1)], 3.0),
        blend(&[(1.0, p0), (2.0, p1)], 3.0),
        blend(&[(1.0, p0), (4.0, p1), (1.0, p)], 6.0),
    );
}

fn blend(terms: &[(f64, Point)], denom: f64) -> Point {
    let sum = terms
        .iter()
        .fold(Vec2::ZERO, |acc, &(w, p)| acc + p.to_vec2() * w);
    (sum / denom).to_point()
}

/// Circular arc of radius `|to.x - from.x| / 2` swept clockwise (in screen space) from
/// `from` to `to`, i.e. above a horizontal baseline when `from` is left of `to`.
pub(crate) fn semicircle(from: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(from);

    let r = (to.x - from.x).abs() / 2.0;
    let arc = SvgArc {
        from,
        to,
        radii: Vec2::new(r, r),
        x_rotation: 0.0,
        large_arc: false,
        sweep: true,
    };
    match Arc::from_svg_arc(&arc) {
        Some(arc) => {
            for el in arc.append_iter(0.1) {
                path.push(el);
            }
        }
        None => {
            if from != to {
                path.line_to(to);
            }
        }
    }
    path
}

/// Horizontal cubic link between two tree nodes: leaves `source` and enters `target`
/// horizontally.
pub(crate) fn horizontal_link(source: Point, target: Point) -> BezPath {
    let mid_x = (source.x + target.x) / 2.0;
    let mut path = BezPath::new();
    path.move_to(source);
    path.curve_to(
        Point::new(mid_x, source.y),
        Point::new(mid_x, target.y),
        target,
    );
    path
}

#[cfg(test)]
#[path = "../../tests/unit/layout/path.rs"]
mod tests;
