use super::*;
use crate::{
    foundation::core::{Dataset, Item, ViewMode},
    layout::{LayoutOpts, layout},
};

fn model() -> RenderModel {
    let items = (1..=5)
        .map(|id| Item::new(id, format!("line {id}"), ""))
        .collect();
    let ds = Dataset::from_items("Custom Text", items);
    layout(
        ViewMode::Ring,
        &ds,
        &LayoutOpts {
            width: 300.0,
            height: 200.0,
        },
    )
}

fn out_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("unit_export");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn filename_collapses_whitespace_and_lowercases() {
    assert_eq!(export_filename("Custom Text"), "custom_text_export.pdf");
    assert_eq!(
        export_filename("Surah 1: Al-Faatiha (1-7)"),
        "surah_1:_al-faatiha_(1-7)_export.pdf"
    );
    assert_eq!(export_filename("  A \t\n B  "), "_a_b__export.pdf");
    assert_eq!(export_filename("a/b\\c"), "a_b_c_export.pdf");
    assert_eq!(export_filename(""), "_export.pdf");
}

#[test]
fn wide_images_fill_the_printable_width() {
    let p = fit_image(1920, 480);
    assert!((p.width - (PAGE_WIDTH_PT - 2.0 * MARGIN_PT)).abs() < 1e-3);
    assert!((p.height - p.width / 4.0).abs() < 1e-3);
    assert!((p.x - MARGIN_PT).abs() < 1e-3);
    assert_eq!(p.y, MARGIN_PT + 40.0);
}

#[test]
fn tall_images_are_limited_by_height_and_centered() {
    let p = fit_image(960, 720);
    let max_h = PAGE_HEIGHT_PT - 2.0 * MARGIN_PT - 40.0;
    assert!((p.height - max_h).abs() < 1e-3);
    assert!((p.width - max_h * 960.0 / 720.0).abs() < 1e-3);
    assert!((p.x + p.width / 2.0 - PAGE_WIDTH_PT / 2.0).abs() < 1e-3);
    assert!(p.y + p.height <= PAGE_HEIGHT_PT - MARGIN_PT + 1e-3);
}

#[test]
fn degenerate_sizes_do_not_divide_by_zero() {
    let p = fit_image(0, 0);
    assert!(p.width.is_finite() && p.height.is_finite());
}

#[test]
fn latin1_replaces_unsupported_characters() {
    assert_eq!(latin1("Café"), "Café");
    assert_eq!(latin1("سورة a"), "???? a");
}

#[test]
fn pdf_bytes_have_header_and_trailer() {
    let svg = render_svg(&model(), crate::foundation::color::Rgb::WHITE);
    let bytes = render_pdf(&svg, "Custom Text", &RasterOpts::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(64)..]).into_owned();
    assert!(tail.contains("%%EOF"));
}

/// Dictionaries of every image XObject in an uncompressed-object PDF.
fn image_dicts(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    text.match_indices("/Subtype")
        .filter(|(at, _)| text[at + 8..].trim_start().starts_with("/Image"))
        .map(|(at, _)| {
            let end = text[at..].find("stream").map_or(text.len(), |e| at + e);
            text[at..end].to_string()
        })
        .collect()
}

fn dict_int(dict: &str, key: &str) -> Option<u32> {
    let rest = &dict[dict.find(key)? + key.len()..];
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[test]
fn page_image_is_opaque_rgb_at_raster_size() {
    let svg = render_svg(&model(), crate::foundation::color::Rgb::WHITE);
    let bytes = render_pdf(&svg, "Custom Text", &RasterOpts::default()).unwrap();

    let images = image_dicts(&bytes);
    assert_eq!(images.len(), 1, "expected a single image without a soft mask");
    let dict = &images[0];
    assert_eq!(dict_int(dict, "/Width"), Some(600));
    assert_eq!(dict_int(dict, "/Height"), Some(400));
    assert!(dict.contains("/DeviceRGB"));
    assert!(dict.contains("DCTDecode"));
}

#[test]
fn page_image_is_compressed() {
    let svg = render_svg(&model(), crate::foundation::color::Rgb::WHITE);
    let bytes = render_pdf(&svg, "Custom Text", &RasterOpts::default()).unwrap();
    assert!(bytes.len() < 600 * 400 * 3 / 4, "pdf is {} bytes", bytes.len());
}

#[test]
fn export_into_uses_derived_filename() {
    let dir = out_dir();
    let path = export_into(&dir, &model(), "Custom Text", &RasterOpts::default()).unwrap();
    assert_eq!(path.file_name().unwrap(), "custom_text_export.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn raster_failures_surface_as_export_errors() {
    let err = render_pdf("<svg", "Broken", &RasterOpts::default()).unwrap_err();
    assert!(matches!(err, ChiasmError::Export(_)));

    let bad = RasterOpts {
        scale: -1.0,
        ..RasterOpts::default()
    };
    let err = export_pdf(&model(), "Broken", &bad, &out_dir().join("never.pdf")).unwrap_err();
    assert!(matches!(err, ChiasmError::Export(_)));
    assert!(!out_dir().join("never.pdf").exists());
}
