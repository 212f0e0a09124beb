//! Chiasm pairs a sequence of verses outside-in (first with last, second with second-to-last,
//! and so on) and draws that ring structure three ways: as a ring, a nested-bracket tree and
//! a timeline of arcs.
//!
//! The flow is:
//!
//! - get a [`Dataset`] from a [`VerseSource`] or from pasted text ([`parse_text`])
//! - lay it out with [`layout`] into a [`RenderModel`]
//! - write it with [`render_svg`], rasterize it with [`rasterize_svg`], or export a one-page
//!   PDF with [`export_pdf`]
//!
//! [`Session`] ties these together the way an interactive front end uses them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Pointer hover highlights.
pub mod interaction;
/// Dataset to geometry transforms.
pub mod layout;
/// Outside-in pairing.
pub mod pairing;
/// Pasted text to dataset.
pub mod parser;
/// SVG and raster output.
pub mod render;
/// Application state and user actions.
pub mod session;
/// Verse sources.
pub mod source;
/// PDF export.
pub mod export;

pub use crate::foundation::color::{CATEGORY10, Rgb, pair_color};
pub use crate::foundation::config::Config;
pub use crate::foundation::core::{
    BezPath, Collection, Dataset, Item, Pair, Point, Vec2, ViewMode,
};
pub use crate::foundation::error::{ChiasmError, ChiasmResult};

pub use crate::export::{export_filename, export_into, export_pdf, render_pdf};
pub use crate::interaction::{Highlight, apply_highlight, hover};
pub use crate::layout::{LayoutOpts, RenderModel, layout};
pub use crate::pairing::{PairIndex, generate_pairs};
pub use crate::parser::parse_text;
pub use crate::render::{RasterImage, RasterOpts, encode_png, rasterize_svg, render_svg, write_png};
pub use crate::session::{LoadToken, Session};
pub use crate::source::{AlQuranCloud, JsonDirSource, VerseSource};
