//! SVG visualization of computed layouts.
//!
//! Draws the container as an outer box and every placement as a numbered
//! inner rectangle, scaled to fit a fixed panel. Handy for eyeballing a
//! layout in docs or bug reports.
//!
//! # Example
//!
//! ```
//! use zengallery::{ContainerBox, ImageDescriptor, compute_layout, svg::render_gallery_svg};
//!
//! let images = [ImageDescriptor::new(1600, 900), ImageDescriptor::new(900, 1600)];
//! let placements = compute_layout(&images, 800.0, 400.0, 8.0);
//!
//! let svg = render_gallery_svg(ContainerBox::new(800.0, 400.0), &placements);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::geometry::{ContainerBox, Placement};
use crate::grid::GridLayout;

/// Maximum pixel width of the drawing panel.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height of the drawing panel.
const MAX_PANEL_H: f64 = 360.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top and bottom margin.
const MARGIN_Y: f64 = 20.0;
/// Height of the label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of the annotation text area below the panel.
const ANNOTATION_H: f64 = 20.0;

/// One panel: a container and the rectangles placed in it.
struct Panel {
    label: String,
    annotation: String,
    outer: ContainerBox,
    items: Vec<(usize, Placement)>,
}

/// Render a freeform gallery layout as a complete SVG document.
///
/// `placements` are labeled with their index, so they line up with the
/// images passed to [`compute_layout`](crate::compute_layout).
pub fn render_gallery_svg(container: ContainerBox, placements: &[Placement]) -> String {
    let panel = Panel {
        label: format!("Gallery  {}×{}", container.width, container.height),
        annotation: format!(
            "{} image{}",
            placements.len(),
            if placements.len() == 1 { "" } else { "s" }
        ),
        outer: container,
        items: placements.iter().copied().enumerate().collect(),
    };
    render_panel(&panel)
}

/// Render a project tile grid as a complete SVG document.
///
/// Skipped tiles are not drawn; the annotation counts them.
pub fn render_grid_svg(container_width: f64, layout: &GridLayout) -> String {
    let skipped = layout.tiles.iter().filter(|t| t.is_none()).count();
    let panel = Panel {
        label: format!("Grid  {} columns", layout.columns),
        annotation: format!(
            "unit {:.1}, {} rows, {} skipped",
            layout.unit, layout.rows_used, skipped
        ),
        outer: ContainerBox::new(container_width, layout.total_height),
        items: layout.placed().map(|(i, t)| (i, t.rect)).collect(),
    };
    render_panel(&panel)
}

/// Scale a box to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(outer: ContainerBox) -> (f64, f64, f64) {
    if !(outer.width > 0.0 && outer.height > 0.0) {
        return (MAX_PANEL_W, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / outer.width).min(MAX_PANEL_H / outer.height);
    (outer.width * scale, outer.height * scale, scale)
}

fn render_panel(panel: &Panel) -> String {
    let (pw, ph, scale) = scale_to_fit(panel.outer);
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_Y + LABEL_H + ph + ANNOTATION_H + MARGIN_Y;
    let center_x = total_w / 2.0;

    let mut svg = String::with_capacity(2048 + panel.items.len() * 160);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32,
        total_h.ceil() as u32,
        total_w,
        total_h.ceil()
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .index { font-size: 10px; fill: #fff; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let mut y = MARGIN_Y;
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        y + 14.0,
        escape_xml(&panel.label)
    ));
    svg.push('\n');
    y += LABEL_H;

    let panel_x = center_x - pw / 2.0;
    let panel_y = y;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    for (index, p) in &panel.items {
        let ix = panel_x + p.x * scale;
        let iy = panel_y + p.y * scale;
        let iw = p.width * scale;
        let ih = p.height * scale;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
            ix, iy, iw, ih
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text>"#,
            ix + iw / 2.0,
            iy + ih / 2.0 + 4.0,
            index
        ));
        svg.push('\n');
    }

    if !panel.annotation.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            panel_y + ph + 14.0,
            escape_xml(&panel.annotation)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
