use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageFilter, ImageTransform, ImageXObject, Mm,
    PdfDocument, Px,
};

use crate::{
    foundation::error::{ChiasmError, ChiasmResult},
    layout::RenderModel,
    render::{RasterImage, RasterOpts, rasterize_svg, render_svg},
};

/// A4 landscape, in points.
pub const PAGE_WIDTH_PT: f32 = 841.89;
/// A4 landscape, in points.
pub const PAGE_HEIGHT_PT: f32 = 595.28;
/// Blank border on every side of the page.
pub const MARGIN_PT: f32 = 40.0;
/// Space reserved under the top margin for the title line.
const HEADER_PT: f32 = 40.0;
const TITLE_SIZE_PT: f32 = 20.0;
/// Title baseline, below the top edge.
const TITLE_BASELINE_PT: f32 = MARGIN_PT + 10.0;
/// JPEG quality of the embedded raster.
const JPEG_QUALITY: u8 = 92;

/// Where the visualization lands on the page, in points from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Drawn width.
    pub width: f32,
    /// Drawn height.
    pub height: f32,
}

/// `"Surah 1: Al-Faatiha (1-7)"` becomes `"surah_1:_al-faatiha_(1-7)_export.pdf"`.
///
/// Each run of whitespace turns into one underscore and the result is lower-cased. Path
/// separators also become underscores so the name stays a single path component.
pub fn export_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 11);
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        match c {
            '/' | '\\' => name.push('_'),
            _ => name.extend(c.to_lowercase()),
        }
    }
    name.push_str("_export.pdf");
    name
}

/// Fit an image of the given pixel size on the page.
///
/// The image spans the printable width, unless that would overflow the space under the
/// header, in which case it is limited by height. It is centered horizontally and its top
/// edge sits under the header.
pub fn fit_image(width_px: u32, height_px: u32) -> Placement {
    let aspect = width_px.max(1) as f32 / height_px.max(1) as f32;
    let max_h = PAGE_HEIGHT_PT - 2.0 * MARGIN_PT - HEADER_PT;

    let mut width = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;
    let mut height = width / aspect;
    if height > max_h {
        height = max_h;
        width = height * aspect;
    }

    Placement {
        x: (PAGE_WIDTH_PT - width) / 2.0,
        y: MARGIN_PT + HEADER_PT,
        width,
        height,
    }
}

fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Builtin PDF fonts only cover Latin-1; anything else is replaced.
fn latin1(s: &str) -> String {
    s.chars()
        .map(|c| if (c as u32) < 0x100 { c } else { '?' })
        .collect()
}

/// The raster as an opaque RGB JPEG image object.
///
/// The raster is already flattened onto its background, so the alpha channel is dropped
/// and the page image carries no soft mask.
fn jpeg_xobject(raster: &RasterImage) -> ChiasmResult<ImageXObject> {
    let rgba = image::RgbaImage::from_raw(raster.width, raster.height, raster.rgba8.clone())
        .ok_or_else(|| ChiasmError::export("raster buffer does not match its dimensions"))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode(
            rgb.as_raw(),
            raster.width,
            raster.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ChiasmError::export(format!("encode raster: {e}")))?;

    Ok(ImageXObject {
        width: Px(raster.width as usize),
        height: Px(raster.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: jpeg,
        image_filter: Some(ImageFilter::DCT),
        smask: None,
        clipping_bbox: None,
    })
}

/// Rasterize `svg` and lay it out under `title` on one A4 landscape page.
#[tracing::instrument(skip(svg, opts), fields(bytes = svg.len()))]
pub fn render_pdf(svg: &str, title: &str, opts: &RasterOpts) -> ChiasmResult<Vec<u8>> {
    let raster = rasterize_svg(svg, opts)
        .map_err(|e| ChiasmError::export(format!("rasterize visualization: {e}")))?;
    let image = Image::from(jpeg_xobject(&raster)?);

    let (doc, page, layer) = PdfDocument::new(
        latin1(title),
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ChiasmError::export(format!("load title font: {e}")))?;
    layer.use_text(
        latin1(title),
        TITLE_SIZE_PT,
        mm(MARGIN_PT),
        mm(PAGE_HEIGHT_PT - TITLE_BASELINE_PT),
        &font,
    );

    let place = fit_image(raster.width, raster.height);
    // At 72 dpi one pixel is one point before scaling.
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(mm(place.x)),
            translate_y: Some(mm(PAGE_HEIGHT_PT - place.y - place.height)),
            scale_x: Some(place.width / raster.width as f32),
            scale_y: Some(place.height / raster.height as f32),
            dpi: Some(72.0),
            ..Default::default()
        },
    );

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ChiasmError::export(format!("serialize pdf: {e}")))?;
    tracing::debug!(bytes = bytes.len(), "rendered pdf");
    Ok(bytes)
}

/// Render `model` and write the PDF to `path`.
pub fn export_pdf(
    model: &RenderModel,
    title: &str,
    opts: &RasterOpts,
    path: &Path,
) -> ChiasmResult<()> {
    let svg = render_svg(model, opts.background);
    let bytes = render_pdf(&svg, title, opts)?;
    std::fs::write(path, bytes)
        .map_err(|e| ChiasmError::export(format!("write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "exported pdf");
    Ok(())
}

/// [`export_pdf`] into `dir` under [`export_filename`]`(title)`; returns the written path.
pub fn export_into(
    dir: &Path,
    model: &RenderModel,
    title: &str,
    opts: &RasterOpts,
) -> ChiasmResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ChiasmError::export(format!("create '{}': {e}", dir.display())))?;
    let path = dir.join(export_filename(title));
    export_pdf(model, title, opts, &path)?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/export/pdf.rs"]
mod tests;
