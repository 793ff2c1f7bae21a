//! Fidelity-ramp pass: the analytic phase-fidelity curve with threshold
//! line, forward/reverse phase shading, axes, and legend.

use std::fmt::Write as _;

use openphotonics_core::FidelityRamp;

use crate::util::fmt;

const CANVAS_W: f64 = 1000.0;
const CANVAS_H: f64 = 600.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Samples drawn along the curve.
const CURVE_SAMPLES: usize = 500;

pub const RAMP_TITLE: &str = "Adiabatic Phase Fidelity Ramp";
pub const X_LABEL: &str = "Phase units (8-phase cycle)";
pub const Y_LABEL: &str = "Fidelity";

const CURVE_LABEL: &str = "Symbolic phase fidelity";
const THRESHOLD_LABEL: &str = "Min energy recovery";
const FORWARD_LABEL: &str = "Forward (compute)";
const REVERSE_LABEL: &str = "Reverse (uncompute/recover)";

/// Render the ramp plot to an SVG document string (opaque background).
pub fn render_fidelity_ramp(ramp: &FidelityRamp) -> String {
    let plot_w = CANVAS_W - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CANVAS_H - MARGIN_TOP - MARGIN_BOTTOM;

    // Vertical data range covers the full swing of the curve and the
    // threshold line, with a 5% margin on each side.
    let curve_min = ramp.lo - (ramp.hi - ramp.lo);
    let data_min = curve_min.min(ramp.threshold);
    let data_max = ramp.hi.max(ramp.threshold);
    let pad = 0.05 * (data_max - data_min);
    let (y_min, y_max) = (data_min - pad, data_max + pad);

    let px = |t: f64| MARGIN_LEFT + t / ramp.period * plot_w;
    let py = |f: f64| MARGIN_TOP + (y_max - f) / (y_max - y_min) * plot_h;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_W}\" height=\"{CANVAS_H}\" \
         viewBox=\"0 0 {CANVAS_W} {CANVAS_H}\">\n"
    );
    let _ = write!(
        svg,
        "  <rect x=\"0\" y=\"0\" width=\"{CANVAS_W}\" height=\"{CANVAS_H}\" fill=\"white\"/>\n"
    );

    // Forward / reverse phase shading behind everything else.
    let (f0, f1) = ramp.forward_span();
    let (r0, r1) = ramp.reverse_span();
    let _ = write!(
        svg,
        "  <rect x=\"{}\" y=\"{MARGIN_TOP}\" width=\"{}\" height=\"{}\" \
         fill=\"green\" fill-opacity=\"0.1\"/>\n",
        fmt(px(f0)),
        fmt(px(f1) - px(f0)),
        fmt(plot_h)
    );
    let _ = write!(
        svg,
        "  <rect x=\"{}\" y=\"{MARGIN_TOP}\" width=\"{}\" height=\"{}\" \
         fill=\"blue\" fill-opacity=\"0.1\"/>\n",
        fmt(px(r0)),
        fmt(px(r1) - px(r0)),
        fmt(plot_h)
    );

    // Threshold reference line, dashed red across the plot area.
    let ty = fmt(py(ramp.threshold));
    let _ = write!(
        svg,
        "  <line x1=\"{MARGIN_LEFT}\" y1=\"{ty}\" x2=\"{}\" y2=\"{ty}\" \
         stroke=\"red\" stroke-width=\"1.5\" stroke-dasharray=\"6 4\"/>\n",
        MARGIN_LEFT + plot_w
    );

    // The fidelity curve.
    let points: Vec<String> = ramp
        .samples(CURVE_SAMPLES)
        .into_iter()
        .map(|(t, f)| format!("{},{}", fmt(px(t)), fmt(py(f))))
        .collect();
    let _ = write!(
        svg,
        "  <polyline points=\"{}\" fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"1.5\"/>\n",
        points.join(" ")
    );

    // Axis frame.
    let _ = write!(
        svg,
        "  <rect x=\"{MARGIN_LEFT}\" y=\"{MARGIN_TOP}\" width=\"{}\" height=\"{}\" \
         fill=\"none\" stroke=\"#333333\" stroke-width=\"1\"/>\n",
        fmt(plot_w),
        fmt(plot_h)
    );

    // X ticks at whole phase units.
    for i in 0..=8 {
        let t = ramp.period * i as f64 / 8.0;
        let x = fmt(px(t));
        let y0 = MARGIN_TOP + plot_h;
        let _ = write!(
            svg,
            "  <line x1=\"{x}\" y1=\"{y0}\" x2=\"{x}\" y2=\"{}\" \
             stroke=\"#333333\" stroke-width=\"1\"/>\n",
            y0 + 5.0
        );
        let _ = write!(
            svg,
            "  <text x=\"{x}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
             font-size=\"12\">{}</text>\n",
            y0 + 20.0,
            fmt(t)
        );
    }

    // Y ticks, 5 evenly spaced.
    for i in 0..5 {
        let f = y_min + (y_max - y_min) * i as f64 / 4.0;
        let y = fmt(py(f));
        let _ = write!(
            svg,
            "  <line x1=\"{}\" y1=\"{y}\" x2=\"{MARGIN_LEFT}\" y2=\"{y}\" \
             stroke=\"#333333\" stroke-width=\"1\"/>\n",
            MARGIN_LEFT - 5.0
        );
        let _ = write!(
            svg,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-family=\"sans-serif\" \
             font-size=\"12\">{f:.3}</text>\n",
            MARGIN_LEFT - 9.0,
            py(f) + 4.0
        );
    }

    // Axis labels and title.
    let _ = write!(
        svg,
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"14\">{X_LABEL}</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        CANVAS_H - 15.0
    );
    let _ = write!(
        svg,
        "  <text x=\"20\" y=\"{}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"14\" transform=\"rotate(-90 20 {})\">{Y_LABEL}</text>\n",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );
    let _ = write!(
        svg,
        "  <text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-family=\"sans-serif\" \
         font-size=\"18\">{RAMP_TITLE}</text>\n",
        CANVAS_W / 2.0
    );

    // Legend, top-right inside the plot area.
    let lx = MARGIN_LEFT + plot_w - 230.0;
    let ly = MARGIN_TOP + 12.0;
    let _ = write!(
        svg,
        "  <rect x=\"{lx}\" y=\"{ly}\" width=\"218\" height=\"78\" fill=\"white\" \
         fill-opacity=\"0.85\" stroke=\"#999999\" stroke-width=\"0.5\"/>\n"
    );
    let entries: [(&str, &str, bool); 4] = [
        ("#1f77b4", CURVE_LABEL, false),
        ("red", THRESHOLD_LABEL, true),
        ("green", FORWARD_LABEL, false),
        ("blue", REVERSE_LABEL, false),
    ];
    for (i, (color, label, dashed)) in entries.iter().enumerate() {
        let ey = ly + 15.0 + i as f64 * 17.0;
        let dash = if *dashed { " stroke-dasharray=\"6 4\"" } else { "" };
        let _ = write!(
            svg,
            "  <line x1=\"{}\" y1=\"{ey}\" x2=\"{}\" y2=\"{ey}\" stroke=\"{color}\" \
             stroke-width=\"2\"{dash}/>\n",
            lx + 8.0,
            lx + 32.0
        );
        let _ = write!(
            svg,
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"11\">{label}</text>\n",
            lx + 38.0,
            ey + 4.0
        );
    }

    svg.push_str("</svg>\n");
    svg
}
