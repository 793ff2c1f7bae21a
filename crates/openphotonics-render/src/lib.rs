//! # OpenPhotonics Render
//!
//! SVG rendering passes for the generator: the layout preview (scene
//! polygons, auto-fit view, transparent background) and the phase-fidelity
//! ramp plot (curve, threshold line, phase shading, axes, legend).
//! Both passes produce complete SVG document strings; persisting them is the
//! caller's concern.

pub mod preview;
pub mod ramp;
mod util;

pub use preview::render_layout_preview;
pub use ramp::render_fidelity_ramp;
