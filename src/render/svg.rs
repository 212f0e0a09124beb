use std::fmt::Write as _;

use crate::{
    foundation::color::Rgb,
    layout::{RenderModel, TextAnchor},
};

const FONT_FAMILY: &str = "sans-serif";

/// Standalone SVG document for `model` on a `background`-filled canvas.
///
/// Nodes carry a `<title>` tooltip (text, then translation) and a CSS `:hover` rule that
/// grows them to their hover radius, so the file keeps its hover affordance in a browser.
#[tracing::instrument(skip(model), fields(view = %model.view, nodes = model.nodes.len()))]
pub fn render_svg(model: &RenderModel, background: Rgb) -> String {
    let w = num(model.width);
    let h = num(model.height);
    let mut out = String::with_capacity(4096 + model.nodes.len() * 256);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" class="chiasm chiasm-{}">"#,
        model.view
    );
    let _ = writeln!(out, "<style>");
    let _ = writeln!(out, ".node circle {{ transition: r 0.2s; }}");
    if let Some(node) = model.nodes.first() {
        let _ = writeln!(
            out,
            ".node:hover circle {{ r: {}px; }}",
            num(node.hover_radius)
        );
    }
    let _ = writeln!(out, "</style>");
    let _ = writeln!(out, r#"<rect width="{w}" height="{h}" fill="{background}"/>"#);

    if !model.guides.is_empty() {
        out.push_str("<g class=\"guides\">\n");
        for g in &model.guides {
            let _ = writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                num(g.from.x),
                num(g.from.y),
                num(g.to.x),
                num(g.to.y),
                g.stroke,
                num(g.width)
            );
        }
        out.push_str("</g>\n");
    }

    if !model.links.is_empty() {
        out.push_str("<g class=\"links\">\n");
        for link in &model.links {
            out.push_str("<path");
            if let Some(k) = link.pair {
                let _ = write!(out, r#" data-pair="{k}""#);
            }
            let _ = writeln!(
                out,
                r#" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
                link.path.to_svg(),
                link.stroke,
                num(link.width),
                num(link.opacity)
            );
        }
        out.push_str("</g>\n");
    }

    if !model.nodes.is_empty() {
        out.push_str("<g class=\"nodes\">\n");
        for node in &model.nodes {
            out.push_str("<g class=\"node\"");
            if let Some(i) = node.item {
                let _ = write!(out, r#" data-item="{i}""#);
            }
            out.push('>');
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                num(node.center.x),
                num(node.center.y),
                num(node.radius),
                node.fill,
                node.stroke.unwrap_or(Rgb::GUIDE),
                num(node.stroke_width)
            );
            if let Some(tip) = &node.tooltip {
                let _ = write!(out, "<title>{}", escape(&tip.text));
                if !tip.translation.is_empty() {
                    let _ = write!(out, "\n{}", escape(&tip.translation));
                }
                out.push_str("</title>");
            }
            out.push_str("</g>\n");
        }
        out.push_str("</g>\n");
    }

    if !model.labels.is_empty() {
        out.push_str("<g class=\"labels\">\n");
        for label in &model.labels {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" dy="{}em" text-anchor="{}" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
                num(label.pos.x),
                num(label.pos.y),
                num(label.dy_em),
                label.anchor.as_str(),
                num(label.font_size),
                label.font_weight,
                label.fill,
                escape(&label.text)
            );
        }
        out.push_str("</g>\n");
    }

    if let Some(message) = &model.message {
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" text-anchor="{}" font-family="{FONT_FAMILY}" font-size="16" fill="{}">{}</text>"#,
            num(model.width / 2.0),
            num(model.height / 2.0),
            TextAnchor::Middle.as_str(),
            Rgb::LABEL,
            escape(message)
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Shortest decimal with at most three fractional digits.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
