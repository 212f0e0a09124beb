use crate::{
    foundation::{
        color::{Rgb, pair_color},
        core::{Dataset, Point, ViewMode},
    },
    layout::{
        model::{
            GuideLine, Label, LayoutOpts, LinkShape, NodeShape, RenderModel, TextAnchor, Tooltip,
        },
        path::semicircle,
    },
    pairing::PairIndex,
};

const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const MARGIN_LEFT: f64 = 40.0;
/// Outer padding of the point scale, in steps.
const PADDING: f64 = 0.8;
const LABEL_DROP: f64 = 30.0;

pub(crate) const NODE_RADIUS: f64 = 12.0;
pub(crate) const HOVER_RADIUS: f64 = 18.0;

/// Items left to right along one axis; each pair joined by a semicircle above it.
#[tracing::instrument(skip(dataset), fields(items = dataset.items.len()))]
pub fn timeline_layout(dataset: &Dataset, opts: &LayoutOpts) -> RenderModel {
    let mut model = RenderModel::empty(ViewMode::Timeline, opts);
    let n = dataset.items.len();
    if n == 0 {
        return model;
    }

    let inner_w = (opts.width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let inner_h = (opts.height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
    let axis_y = MARGIN_TOP + inner_h / 2.0;
    let xs: Vec<f64> = point_scale(n, inner_w)
        .into_iter()
        .map(|x| MARGIN_LEFT + x)
        .collect();

    model.guides.push(GuideLine {
        from: Point::new(MARGIN_LEFT, axis_y),
        to: Point::new(MARGIN_LEFT + inner_w, axis_y),
        stroke: Rgb::GUIDE,
        width: 3.0,
    });

    for (k, pair) in dataset.pairs.iter().enumerate() {
        let (Some(&xa), Some(&xb)) = (xs.get(pair.a), xs.get(pair.b)) else {
            tracing::warn!(pair = k, a = pair.a, b = pair.b, "pair references missing item");
            continue;
        };
        model.links.push(LinkShape {
            pair: Some(k),
            path: semicircle(Point::new(xa, axis_y), Point::new(xb, axis_y)),
            stroke: pair_color(k),
            width: 2.5,
            opacity: 1.0,
        });
    }

    let index = PairIndex::new(&dataset.pairs, n);
    for (i, item) in dataset.items.iter().enumerate() {
        let center = Point::new(xs[i], axis_y);
        model.nodes.push(NodeShape {
            item: Some(i),
            center,
            radius: NODE_RADIUS,
            hover_radius: HOVER_RADIUS,
            fill: Rgb::WHITE,
            stroke: index.pair_of(i).map(pair_color),
            stroke_width: 3.0,
            tooltip: Some(Tooltip::from(item)),
        });
        model.labels.push(Label {
            text: item.id.to_string(),
            pos: Point::new(center.x, center.y + LABEL_DROP),
            anchor: TextAnchor::Middle,
            dy_em: 0.0,
            font_size: 12.0,
            font_weight: 500,
            fill: Rgb::INK,
        });
    }

    model
}

/// Positions of `n` evenly spaced points in `[0, extent]` with `PADDING` steps of empty
/// space at either end, centered.
pub(crate) fn point_scale(n: usize, extent: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let gaps = (n - 1) as f64;
    let step = extent / (gaps + PADDING * 2.0).max(1.0);
    let start = (extent - step * gaps) / 2.0;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/timeline.rs"]
mod tests;
