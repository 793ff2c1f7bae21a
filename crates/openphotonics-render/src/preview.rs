//! Layout preview pass: every scene polygon as a filled, outlined shape on
//! a transparent background, auto-fit to the scene bounds.

use std::fmt::Write as _;

use openphotonics_core::Scene;

use crate::util::{fmt, hex};

const CANVAS_W: f64 = 1400.0;
const CANVAS_H: f64 = 1000.0;
const MARGIN: f64 = 40.0;
const TITLE_BAND: f64 = 30.0;

pub const PREVIEW_TITLE: &str = "RPC 8-Channel WDM Interface Layout Preview";

/// Render the scene to an SVG document string.
///
/// The view is scaled uniformly to the content bounding box, the y axis is
/// flipped so layout +y points up, and the background stays transparent.
pub fn render_layout_preview(scene: &Scene) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_W}\" height=\"{CANVAS_H}\" \
         viewBox=\"0 0 {CANVAS_W} {CANVAS_H}\">\n"
    );
    let _ = write!(
        svg,
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"18\">{PREVIEW_TITLE}</text>\n",
        CANVAS_W / 2.0,
        MARGIN / 2.0 + 8.0
    );

    let Some(bbox) = scene.bbox() else {
        svg.push_str("</svg>\n");
        return svg;
    };

    let avail_w = CANVAS_W - 2.0 * MARGIN;
    let avail_h = CANVAS_H - 2.0 * MARGIN - TITLE_BAND;
    let scale = (avail_w / bbox.width().max(f64::MIN_POSITIVE))
        .min(avail_h / bbox.height().max(f64::MIN_POSITIVE));
    let offset_x = MARGIN + (avail_w - bbox.width() * scale) / 2.0;
    let offset_y = MARGIN + TITLE_BAND + (avail_h - bbox.height() * scale) / 2.0;

    let tx = |x: f64| (x - bbox.min.x) * scale + offset_x;
    // SVG y grows downward; flip so the layout reads the right way up.
    let ty = |y: f64| (bbox.max.y - y) * scale + offset_y;

    for poly in scene.polygons() {
        let points: Vec<String> = poly
            .vertices
            .iter()
            .map(|p| format!("{},{}", fmt(tx(p.x)), fmt(ty(p.y))))
            .collect();
        let _ = write!(
            svg,
            "  <polygon points=\"{}\" fill=\"{}\" fill-opacity=\"0.7\" \
             stroke=\"black\" stroke-width=\"0.5\"/>\n",
            points.join(" "),
            hex(poly.fill)
        );
    }

    svg.push_str("</svg>\n");
    log::debug!("layout preview: {} polygons rendered", scene.polygon_count());
    svg
}
