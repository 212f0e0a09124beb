//! Turning a [`RenderModel`](crate::layout::RenderModel) into pixels: an SVG document first,
//! then (for PNG and PDF output) a raster of that document.

mod raster;
mod svg;

pub use raster::{RasterImage, RasterOpts, encode_png, rasterize_svg, write_png};
pub use svg::render_svg;
