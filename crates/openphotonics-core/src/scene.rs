use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::geometry::{BBox, Point};

/// Sides used for the ring-boundary polygon approximation.
const RING_SEGMENTS: usize = 64;

/// A closed filled polygon registered in the scene.
///
/// The vertex loop is always closed: the first vertex is repeated as the
/// last. Polygons are immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePolygon {
    pub vertices: Vec<Point>,
    pub fill: Rgb,
}

impl ScenePolygon {
    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.vertices)
    }

    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Accumulates device polygons into an ordered scene.
///
/// Builder helpers append as a side effect; `finish` hands the result to the
/// renderer as an immutable [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    polygons: Vec<ScenePolygon>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Register a polygon, closing the vertex loop if the caller left it open.
    pub fn add_polygon(&mut self, mut vertices: Vec<Point>, fill: Rgb) {
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            if first != last {
                vertices.push(first);
            }
        }
        self.polygons.push(ScenePolygon { vertices, fill });
    }

    /// A straight waveguide strip: a rectangle centered on the segment from
    /// `(x0, y0)` to `(x1, y1)` with `width` perpendicular to it.
    ///
    /// Coincident endpoints give a zero-length strip; nothing is registered.
    pub fn waveguide(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, fill: Rgb) {
        let (dx, dy) = (x1 - x0, y1 - y0);
        let length = dx.hypot(dy);
        if length == 0.0 {
            return;
        }
        let (ux, uy) = (dx / length, dy / length);
        // Unit normal to the segment direction.
        let (px, py) = (-uy, ux);
        let half = width / 2.0;
        let pts = vec![
            Point::new(x0 + px * half, y0 + py * half),
            Point::new(x1 + px * half, y1 + py * half),
            Point::new(x1 - px * half, y1 - py * half),
            Point::new(x0 - px * half, y0 - py * half),
        ];
        self.add_polygon(pts, fill);
    }

    /// A ring resonator depicted as an annulus: two 64-gon boundaries, the
    /// outer at `radius + width/2` in the requested fill and the inner at
    /// `radius - width/2` always in white.
    pub fn ring(&mut self, xc: f64, yc: f64, radius: f64, width: f64, fill: Rgb) {
        let circle = |r: f64| -> Vec<Point> {
            (0..RING_SEGMENTS)
                .map(|i| {
                    let theta = 2.0 * PI * i as f64 / RING_SEGMENTS as f64;
                    Point::new(xc + r * theta.cos(), yc + r * theta.sin())
                })
                .collect()
        };
        self.add_polygon(circle(radius + width / 2.0), fill);
        self.add_polygon(circle(radius - width / 2.0), Rgb::WHITE);
    }

    /// An IQ modulator placeholder: an axis-aligned square anchored at its
    /// lower-left corner.
    pub fn modulator(&mut self, x: f64, y: f64, size: f64, fill: Rgb) {
        self.square(x, y, size, fill);
    }

    /// A photodetector placeholder; same footprint as the modulator.
    pub fn detector(&mut self, x: f64, y: f64, size: f64, fill: Rgb) {
        self.square(x, y, size, fill);
    }

    fn square(&mut self, x: f64, y: f64, size: f64, fill: Rgb) {
        let pts = vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ];
        self.add_polygon(pts, fill);
    }

    pub fn finish(self) -> Scene {
        Scene {
            polygons: self.polygons,
        }
    }
}

/// An immutable, ordered collection of registered polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    polygons: Vec<ScenePolygon>,
}

impl Scene {
    pub fn polygons(&self) -> &[ScenePolygon] {
        &self.polygons
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Bounding box of all registered geometry, `None` for an empty scene.
    pub fn bbox(&self) -> Option<BBox> {
        self.polygons
            .iter()
            .filter_map(|p| p.bbox())
            .reduce(|a, b| a.union(&b))
    }
}
