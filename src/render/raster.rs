use std::{
    io::Cursor,
    path::Path,
    sync::{Arc, OnceLock},
};

use crate::foundation::{
    color::Rgb,
    error::{ChiasmError, ChiasmResult},
};

/// Refuse rasters larger than this on either side.
const MAX_DIM: u32 = 16_384;

/// How an SVG document is turned into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOpts {
    /// Device pixels per SVG user unit.
    pub scale: f32,
    /// Color the document is flattened onto.
    pub background: Rgb,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: Rgb::WHITE,
        }
    }
}

/// Opaque RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
}

impl RasterImage {
    /// Pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

fn fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Arc::new(db)
    })
    .clone()
}

/// Parse `svg` and draw it at `opts.scale` over `opts.background`.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize_svg(svg: &str, opts: &RasterOpts) -> ChiasmResult<RasterImage> {
    if !opts.scale.is_finite() || opts.scale <= 0.0 {
        return Err(ChiasmError::render(format!(
            "raster scale must be positive, got {}",
            opts.scale
        )));
    }

    let usvg_opts = usvg::Options {
        fontdb: fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &usvg_opts)
        .map_err(|e| ChiasmError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    let to_px = |v: f32| -> ChiasmResult<u32> {
        let px = (v * opts.scale).ceil();
        if !px.is_finite() || px < 1.0 {
            return Err(ChiasmError::render("svg has invalid width/height"));
        }
        Ok(px as u32)
    };
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(ChiasmError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ChiasmError::render("failed to allocate pixmap"))?;
    let bg = opts.background;
    pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(opts.scale, opts.scale),
        &mut pixmap.as_mut(),
    );

    // Opaque background: premultiplied and straight alpha coincide.
    Ok(RasterImage {
        width,
        height,
        rgba8: pixmap.take(),
    })
}

/// PNG bytes for `image`.
pub fn encode_png(image: &RasterImage) -> ChiasmResult<Vec<u8>> {
    let buf = image::RgbaImage::from_raw(image.width, image.height, image.rgba8.clone())
        .ok_or_else(|| ChiasmError::render("raster buffer does not match its dimensions"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(buf)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| ChiasmError::render(format!("encode png: {e}")))?;
    Ok(out)
}

/// Write `image` to `path` as PNG.
pub fn write_png(image: &RasterImage, path: &Path) -> ChiasmResult<()> {
    image::save_buffer_with_format(
        path,
        &image.rgba8,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ChiasmError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
