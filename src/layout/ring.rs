use std::f64::consts::TAU;

use crate::{
    foundation::{
        color::{Rgb, pair_color},
        core::{Dataset, Point, ViewMode},
    },
    layout::{
        model::{Label, LayoutOpts, LinkShape, NodeShape, RenderModel, TextAnchor, Tooltip},
        path::basis_curve,
    },
    pairing::PairIndex,
};

const MARGIN: f64 = 80.0;
const LABEL_OFFSET: f64 = 25.0;
/// Pair curves bend through `(a + b) * CONTROL_PULL` (relative to the ring center).
const CONTROL_PULL: f64 = 0.3;

pub(crate) const NODE_RADIUS: f64 = 14.0;
pub(crate) const HOVER_RADIUS: f64 = 20.0;

/// Items evenly spaced clockwise from 12 o'clock; each pair joined by a curve that bows
/// toward the center.
#[tracing::instrument(skip(dataset), fields(items = dataset.items.len()))]
pub fn ring_layout(dataset: &Dataset, opts: &LayoutOpts) -> RenderModel {
    let mut model = RenderModel::empty(ViewMode::Ring, opts);
    let n = dataset.items.len();
    if n == 0 {
        return model;
    }

    let radius = (opts.width.min(opts.height) / 2.0 - MARGIN).max(0.0);
    let center = Point::new(opts.width / 2.0, opts.height / 2.0);
    let angles: Vec<f64> = (0..n).map(|i| ring_angle(i, n)).collect();
    let points: Vec<Point> = angles.iter().map(|&t| polar(center, radius, t)).collect();

    for (k, pair) in dataset.pairs.iter().enumerate() {
        let (Some(&a), Some(&b)) = (points.get(pair.a), points.get(pair.b)) else {
            tracing::warn!(pair = k, a = pair.a, b = pair.b, "pair references missing item");
            continue;
        };
        let pull = ((a - center) + (b - center)) * CONTROL_PULL;
        model.links.push(LinkShape {
            pair: Some(k),
            path: basis_curve(&[a, center + pull, b]),
            stroke: pair_color(k),
            width: 2.5,
            opacity: 0.6,
        });
    }

    let index = PairIndex::new(&dataset.pairs, n);
    for (i, item) in dataset.items.iter().enumerate() {
        model.nodes.push(NodeShape {
            item: Some(i),
            center: points[i],
            radius: NODE_RADIUS,
            hover_radius: HOVER_RADIUS,
            fill: Rgb::WHITE,
            stroke: index.pair_of(i).map(pair_color),
            stroke_width: 3.0,
            tooltip: Some(Tooltip::from(item)),
        });
        model.labels.push(Label {
            text: item.id.to_string(),
            pos: polar(center, radius + LABEL_OFFSET, angles[i]),
            anchor: TextAnchor::Middle,
            dy_em: 0.35,
            font_size: 12.0,
            font_weight: 400,
            fill: Rgb::LABEL,
        });
    }

    model
}

/// Angle of item `i` of `n`, clockwise from 12 o'clock.
pub(crate) fn ring_angle(i: usize, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        i as f64 / n as f64 * TAU
    }
}

fn polar(center: Point, r: f64, theta: f64) -> Point {
    Point::new(center.x + r * theta.sin(), center.y - r * theta.cos())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ring.rs"]
mod tests;
