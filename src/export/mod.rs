//! One-page PDF export of a rendered visualization.

mod pdf;

pub use pdf::{
    MARGIN_PT, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, Placement, export_filename, export_into, export_pdf,
    fit_image, render_pdf,
};
