use crate::{
    foundation::{
        color::{Rgb, pair_color},
        core::{Dataset, Point, ViewMode},
    },
    layout::{
        model::{Label, LayoutOpts, LinkShape, NodeShape, RenderModel, TextAnchor, Tooltip},
        path::horizontal_link,
        tidy::tidy_tree,
    },
    pairing::PairIndex,
};

const MARGIN_TOP: f64 = 40.0;
const MARGIN_RIGHT: f64 = 120.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 120.0;
const LABEL_GAP: f64 = 20.0;

pub(crate) const NODE_RADIUS: f64 = 12.0;
pub(crate) const HOVER_RADIUS: f64 = 18.0;

/// Shown instead of a tree when the dataset has no items.
pub const NO_TREE_MESSAGE: &str = "Could not generate tree.";

/// Pairs nested as brackets: node `0` is a synthetic root, every other node is one item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hierarchy {
    /// `children[v]` in display order.
    pub children: Vec<Vec<usize>>,
    /// Item index per node (`None` for the root).
    pub items: Vec<Option<usize>>,
}

impl Hierarchy {
    fn with_root() -> Self {
        Self {
            children: vec![Vec::new()],
            items: vec![None],
        }
    }

    fn attach(&mut self, parent: usize, item: usize, node_of: &mut [Option<usize>]) -> usize {
        if let Some(existing) = node_of[item] {
            return existing;
        }
        let node = self.items.len();
        self.items.push(Some(item));
        self.children.push(Vec::new());
        self.children[parent].push(node);
        node_of[item] = Some(node);
        node
    }

    /// Node count, root included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if only the root exists.
    pub fn is_empty(&self) -> bool {
        self.items.len() <= 1
    }
}

/// Nest `dataset.pairs` (outside-in order, not re-sorted) into a [`Hierarchy`].
///
/// Each non-center pair hangs both items under the current frontier, then the frontier
/// descends into the pair's first item. A center item hangs under the deepest frontier.
/// Returns `None` for an empty dataset.
pub fn build_hierarchy(dataset: &Dataset) -> Option<Hierarchy> {
    let n = dataset.items.len();
    if n == 0 {
        return None;
    }

    let mut tree = Hierarchy::with_root();
    let mut node_of = vec![None; n];

    if dataset.pairs.is_empty() {
        for i in 0..n {
            tree.attach(0, i, &mut node_of);
        }
        return Some(tree);
    }

    let mut frontier = 0usize;
    let mut center = None;
    for pair in &dataset.pairs {
        if pair.a.max(pair.b) >= n {
            tracing::warn!(a = pair.a, b = pair.b, "pair references missing item");
            continue;
        }
        if pair.is_center() {
            center.get_or_insert(pair.a);
            continue;
        }
        let a = tree.attach(frontier, pair.a, &mut node_of);
        tree.attach(frontier, pair.b, &mut node_of);
        frontier = a;
    }
    if let Some(c) = center {
        tree.attach(frontier, c, &mut node_of);
    }

    Some(tree)
}

/// Nested-bracket hierarchy drawn as a horizontal tidy tree: depth runs left to right,
/// siblings top to bottom.
#[tracing::instrument(skip(dataset), fields(items = dataset.items.len()))]
pub fn tree_layout(dataset: &Dataset, opts: &LayoutOpts) -> RenderModel {
    let mut model = RenderModel::empty(ViewMode::Tree, opts);
    let Some(tree) = build_hierarchy(dataset) else {
        model.message = Some(NO_TREE_MESSAGE.to_string());
        return model;
    };

    let inner_w = (opts.width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let inner_h = (opts.height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
    let pos: Vec<Point> = tidy_tree(&tree.children, (inner_h, inner_w))
        .into_iter()
        .map(|p| Point::new(MARGIN_LEFT + p.depth, MARGIN_TOP + p.breadth))
        .collect();

    for (parent, kids) in tree.children.iter().enumerate() {
        for &child in kids {
            model.links.push(LinkShape {
                pair: None,
                path: horizontal_link(pos[parent], pos[child]),
                stroke: Rgb::GUIDE,
                width: 2.0,
                opacity: 1.0,
            });
        }
    }

    let index = PairIndex::new(&dataset.pairs, dataset.items.len());
    for (node, slot) in tree.items.iter().enumerate() {
        let Some(i) = *slot else {
            continue;
        };
        let item = &dataset.items[i];
        let internal = !tree.children[node].is_empty();
        model.nodes.push(NodeShape {
            item: Some(i),
            center: pos[node],
            radius: NODE_RADIUS,
            hover_radius: HOVER_RADIUS,
            fill: Rgb::WHITE,
            stroke: index.pair_of(i).map(pair_color),
            stroke_width: 3.0,
            tooltip: Some(Tooltip::from(item)),
        });
        let (dx, anchor) = if internal {
            (-LABEL_GAP, TextAnchor::End)
        } else {
            (LABEL_GAP, TextAnchor::Start)
        };
        model.labels.push(Label {
            text: item.id.to_string(),
            pos: Point::new(pos[node].x + dx, pos[node].y),
            anchor,
            dy_em: 0.31,
            font_size: 14.0,
            font_weight: 500,
            fill: Rgb::INK,
        });
    }

    model
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tree.rs"]
mod tests;
