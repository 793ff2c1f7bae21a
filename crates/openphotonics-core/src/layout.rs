//! 8-channel WDM interface layout generation.
//!
//! Each channel gets a ring resonator, three coupling waveguides, an IQ
//! modulator, and a detector, tinted with a hue spread evenly around the
//! color circle. A single neutral bus waveguide spans the full layout.

use crate::color::{hsl_to_rgb, Rgb};
use crate::scene::{Scene, SceneBuilder};

/// Placement parameters for the WDM interface layout.
///
/// Distances are micrometers; the defaults describe the reference 8-channel
/// interface.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// X position where the bus coupling region starts.
    pub bus_x_start: f64,
    /// X position of the compute core block.
    pub core_x: f64,
    /// Side length of the compute core block.
    pub core_size: f64,
    /// Side length of the modulator and detector squares.
    pub mod_size: f64,
    /// Waveguide strip width.
    pub wg_width: f64,
    /// Ring resonator mean radius.
    pub ring_radius: f64,
    /// Ring annulus width.
    pub ring_width: f64,
    /// Number of WDM channels.
    pub channels: usize,
    /// Vertical spacing between adjacent channels.
    pub channel_pitch: f64,
    /// Hue increment per channel, in degrees.
    pub hue_step: f64,
    /// Saturation percentage for channel tints.
    pub saturation: f64,
    /// Lightness percentage for channel tints.
    pub lightness: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            bus_x_start: 100.0,
            core_x: 300.0,
            core_size: 120.0,
            mod_size: 25.0,
            wg_width: 0.45,
            ring_radius: 10.0,
            ring_width: 0.45,
            channels: 8,
            channel_pitch: 15.0,
            hue_step: 45.0,
            saturation: 70.0,
            lightness: 70.0,
        }
    }
}

impl LayoutParams {
    /// Vertical offset of channel `i`, centering the bank on y = 0.
    pub fn channel_y(&self, i: usize) -> f64 {
        i as f64 * self.channel_pitch - (self.channels - 1) as f64 * self.channel_pitch / 2.0
    }

    /// Fill color of channel `i`: hue `i * hue_step` degrees.
    pub fn channel_color(&self, i: usize) -> Rgb {
        hsl_to_rgb(i as f64 * self.hue_step, self.saturation, self.lightness)
    }

    /// Lower bound on the registered polygon count for any unmodified
    /// parameter set: ring outer + ring inner + modulator + detector per
    /// channel. The per-channel waveguides and the bus come on top.
    pub fn min_polygon_count(&self) -> usize {
        self.channels * 4
    }
}

/// Build the full interface scene from placement parameters.
pub fn build_interface(params: &LayoutParams) -> Scene {
    let mut builder = SceneBuilder::new();
    let bus_x = params.bus_x_start;

    for i in 0..params.channels {
        let y = params.channel_y(i);
        let tint = params.channel_color(i);

        // Ring plus bus couplers.
        builder.ring(
            bus_x + 50.0 + i as f64 * 20.0,
            y,
            params.ring_radius,
            params.ring_width,
            tint,
        );
        builder.waveguide(bus_x + 20.0, y, bus_x + 80.0, y, params.wg_width, Rgb::gray(0.7));
        builder.waveguide(bus_x + 80.0, y, bus_x + 80.0, y + 10.0, params.wg_width, tint);
        builder.waveguide(bus_x + 80.0, y + 10.0, bus_x - 20.0, y, params.wg_width, tint);

        // Modulator and detector.
        builder.modulator(bus_x - 50.0, y - params.mod_size / 2.0, params.mod_size, tint);
        builder.detector(
            params.core_x + params.core_size + 50.0,
            y - params.mod_size / 2.0,
            params.mod_size,
            tint,
        );
    }

    // Central bus spanning the full layout width.
    builder.waveguide(
        0.0,
        0.0,
        params.core_x + params.core_size + 100.0,
        0.0,
        params.wg_width,
        Rgb::gray(0.6),
    );

    log::debug!(
        "interface layout: {} channels, {} polygons",
        params.channels,
        builder.polygon_count()
    );
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_polygon_count() {
        let params = LayoutParams::default();
        let scene = build_interface(&params);
        // 7 polygons per channel (2 ring boundaries, 3 waveguides, 2 squares)
        // plus the central bus.
        assert_eq!(scene.polygon_count(), params.channels * 7 + 1);
        assert!(scene.polygon_count() >= params.min_polygon_count());
    }

    #[test]
    fn test_channel_offsets_center_on_zero() {
        let params = LayoutParams::default();
        assert!((params.channel_y(0) + 52.5).abs() < 1e-10);
        assert!((params.channel_y(7) - 52.5).abs() < 1e-10);
        let sum: f64 = (0..params.channels).map(|i| params.channel_y(i)).sum();
        assert!(sum.abs() < 1e-10);
    }

    #[test]
    fn test_channel_hues_cover_the_circle() {
        let params = LayoutParams::default();
        for i in 0..params.channels {
            let expected = hsl_to_rgb((i as f64 * 45.0) % 360.0, 70.0, 70.0);
            assert_eq!(params.channel_color(i), expected);
        }
        // 8 x 45 degrees covers the circle exactly once: all tints distinct.
        let tints: Vec<Rgb> = (0..params.channels).map(|i| params.channel_color(i)).collect();
        for (i, a) in tints.iter().enumerate() {
            for b in tints.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ring_centers_advance_per_channel() {
        let params = LayoutParams::default();
        let scene = build_interface(&params);
        // The outer ring boundary of channel i is the first polygon of each
        // 7-polygon channel group.
        for i in 0..params.channels {
            let outer = &scene.polygons()[i * 7];
            let bbox = outer.bbox().unwrap();
            let expected_x = params.bus_x_start + 50.0 + i as f64 * 20.0;
            assert!((bbox.center().x - expected_x).abs() < 1e-9);
            assert!((bbox.center().y - params.channel_y(i)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bus_spans_full_width() {
        let params = LayoutParams::default();
        let scene = build_interface(&params);
        let bus = scene.polygons().last().unwrap();
        let bbox = bus.bbox().unwrap();
        assert!((bbox.min.x - 0.0).abs() < 1e-10);
        assert!((bbox.max.x - (params.core_x + params.core_size + 100.0)).abs() < 1e-10);
        assert_eq!(bus.fill, Rgb::gray(0.6));
    }

    #[test]
    fn test_single_channel_still_meets_floor() {
        let params = LayoutParams {
            channels: 1,
            ..Default::default()
        };
        let scene = build_interface(&params);
        assert!(scene.polygon_count() >= params.min_polygon_count());
    }
}
