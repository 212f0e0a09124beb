//! Pointer hover over a laid-out dataset.
//!
//! [`hover`] answers "what changes when the pointer is over item `i`" without touching any
//! drawing state; [`apply_highlight`] bakes that answer into a [`RenderModel`] so a
//! hovered frame can be rendered like any other.

use crate::{
    foundation::{
        color::Rgb,
        core::{Dataset, ViewMode},
    },
    layout::{RenderModel, Tooltip, node_radii},
    pairing::PairIndex,
};

/// Stroke width of the emphasised pair curve.
pub const EMPHASIS_WIDTH: f64 = 5.0;

/// Visual changes while one item is hovered.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Highlight {
    /// Hovered item.
    pub item: usize,
    /// Items drawn at the hover radius (the hovered item first).
    pub enlarged: Vec<usize>,
    /// Radius of enlarged nodes.
    pub radius: f64,
    /// Paired item filled as the partner (ring only; the item itself at the center).
    pub partner: Option<usize>,
    /// Pair whose curve is emphasised (ring only).
    pub pair: Option<usize>,
    /// Text shown next to the pointer.
    pub tooltip: Tooltip,
}

/// Highlight for hovering `item` in `view`, or `None` if `item` is out of range.
///
/// The ring enlarges the item and its partner and emphasises their curve. A center item is
/// its own partner: it takes the partner fill but grows only once. Tree and timeline
/// enlarge just the item.
pub fn hover(view: ViewMode, dataset: &Dataset, item: usize) -> Option<Highlight> {
    let hovered = dataset.items.get(item)?;
    let (_, radius) = node_radii(view);

    let mut highlight = Highlight {
        item,
        enlarged: vec![item],
        radius,
        partner: None,
        pair: None,
        tooltip: Tooltip::from(hovered),
    };

    if view == ViewMode::Ring {
        let index = PairIndex::new(&dataset.pairs, dataset.items.len());
        if let Some(k) = index.pair_of(item) {
            highlight.pair = Some(k);
            let partner = dataset.pairs[k].partner(item);
            if let Some(p) = partner
                && p != item
            {
                highlight.enlarged.push(p);
            }
            highlight.partner = partner;
        }
    }

    Some(highlight)
}

/// Rewrite `model` into its hovered state.
pub fn apply_highlight(model: &mut RenderModel, highlight: &Highlight) {
    for node in &mut model.nodes {
        let Some(i) = node.item else {
            continue;
        };
        if highlight.enlarged.contains(&i) {
            node.radius = highlight.radius;
        }
        if highlight.partner == Some(i) {
            node.fill = Rgb::PARTNER;
        }
    }
    if let Some(k) = highlight.pair {
        for link in model.links.iter_mut().filter(|l| l.pair == Some(k)) {
            link.width = EMPHASIS_WIDTH;
            link.opacity = 1.0;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/interaction.rs"]
mod tests;
