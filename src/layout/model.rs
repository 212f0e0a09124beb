use serde::Serialize;

use crate::foundation::{
    color::Rgb,
    core::{BezPath, Item, Point, ViewMode},
};

/// Canvas size a layout transform fits into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutOpts {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Default for LayoutOpts {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

/// Renderable geometry produced by a layout transform, in canvas coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderModel {
    /// Transform that produced this model.
    pub view: ViewMode,
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Straight guides drawn beneath everything else.
    pub guides: Vec<GuideLine>,
    /// Pair curves / tree links.
    pub links: Vec<LinkShape>,
    /// One circle per drawn item.
    pub nodes: Vec<NodeShape>,
    /// Text labels.
    pub labels: Vec<Label>,
    /// Placeholder text when there is nothing to draw.
    pub message: Option<String>,
}

impl RenderModel {
    pub(crate) fn empty(view: ViewMode, opts: &LayoutOpts) -> Self {
        Self {
            view,
            width: opts.width,
            height: opts.height,
            guides: Vec::new(),
            links: Vec::new(),
            nodes: Vec::new(),
            labels: Vec::new(),
            message: None,
        }
    }

    /// Node drawn for item `item`, if any.
    pub fn node_for_item(&self, item: usize) -> Option<&NodeShape> {
        self.nodes.iter().find(|n| n.item == Some(item))
    }
}

/// Hover text for a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Source text.
    pub text: String,
    /// Aligned translation.
    pub translation: String,
}

impl From<&Item> for Tooltip {
    fn from(item: &Item) -> Self {
        Self {
            text: item.text.clone(),
            translation: item.translation.clone(),
        }
    }
}

/// A circle standing for one item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeShape {
    /// Index into `Dataset::items`.
    pub item: Option<usize>,
    /// Circle center.
    pub center: Point,
    /// Resting radius.
    pub radius: f64,
    /// Radius while hovered.
    pub hover_radius: f64,
    /// Interior color.
    pub fill: Rgb,
    /// Outline color; `None` when the item belongs to no pair.
    pub stroke: Option<Rgb>,
    /// Outline width.
    pub stroke_width: f64,
    /// Hover text.
    pub tooltip: Option<Tooltip>,
}

/// A stroked path: a pair curve or a tree link.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkShape {
    /// Index into `Dataset::pairs` (tree links carry `None`).
    pub pair: Option<usize>,
    /// Geometry.
    #[serde(serialize_with = "serialize_path")]
    pub path: BezPath,
    /// Stroke color.
    pub stroke: Rgb,
    /// Stroke width.
    pub width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A straight line segment (the timeline axis).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuideLine {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke color.
    pub stroke: Rgb,
    /// Stroke width.
    pub width: f64,
}

/// Horizontal text alignment relative to the label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` value.
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A text label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    /// Text content.
    pub text: String,
    /// Anchor position.
    pub pos: Point,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Baseline shift in em.
    pub dy_em: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// CSS font weight.
    pub font_weight: u16,
    /// Fill color.
    pub fill: Rgb,
}

fn serialize_path<S>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&path.to_svg())
}
