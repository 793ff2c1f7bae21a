//! # OpenPhotonics Core
//!
//! Scene geometry, the HSL color model, and the 8-channel WDM interface
//! layout generator. Builder helpers register polygons into an explicit
//! [`SceneBuilder`]; the finished [`Scene`] is an immutable, ordered polygon
//! sequence consumed by the renderer.

pub mod color;
pub mod fidelity;
pub mod geometry;
pub mod layout;
pub mod scene;

pub use color::{hsl_to_rgb, Rgb};
pub use fidelity::FidelityRamp;
pub use geometry::{BBox, Point};
pub use layout::{build_interface, LayoutParams};
pub use scene::{Scene, SceneBuilder, ScenePolygon};
