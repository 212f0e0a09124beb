//! Layout transforms: pure `Dataset -> RenderModel` functions, one per [`ViewMode`].

pub(crate) mod model;
pub(crate) mod path;
pub(crate) mod ring;
pub(crate) mod tidy;
pub(crate) mod timeline;
pub(crate) mod tree;

pub use model::{
    GuideLine, Label, LayoutOpts, LinkShape, NodeShape, RenderModel, TextAnchor, Tooltip,
};
pub use ring::ring_layout;
pub use timeline::timeline_layout;
pub use tree::{Hierarchy, NO_TREE_MESSAGE, build_hierarchy, tree_layout};

use crate::foundation::core::{Dataset, ViewMode};

/// Run the transform for `view`.
pub fn layout(view: ViewMode, dataset: &Dataset, opts: &LayoutOpts) -> RenderModel {
    match view {
        ViewMode::Ring => ring_layout(dataset, opts),
        ViewMode::Tree => tree_layout(dataset, opts),
        ViewMode::Timeline => timeline_layout(dataset, opts),
    }
}

/// Resting and hovered node radius for `view`.
pub(crate) fn node_radii(view: ViewMode) -> (f64, f64) {
    match view {
        ViewMode::Ring => (ring::NODE_RADIUS, ring::HOVER_RADIUS),
        ViewMode::Tree => (tree::NODE_RADIUS, tree::HOVER_RADIUS),
        ViewMode::Timeline => (timeline::NODE_RADIUS, timeline::HOVER_RADIUS),
    }
}
