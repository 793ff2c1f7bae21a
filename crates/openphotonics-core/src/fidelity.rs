use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Analytic phase-fidelity ramp over one compute/uncompute cycle.
///
/// Fidelity oscillates sinusoidally between `lo` and `hi` with period
/// `period` phase units; the first half of the cycle is the forward
/// (compute) phase, the second half the reverse (uncompute/recover) phase.
/// Purely illustrative, not derived from measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FidelityRamp {
    pub lo: f64,
    pub hi: f64,
    pub period: f64,
    /// Minimum acceptable energy recovery, drawn as a reference line.
    pub threshold: f64,
}

impl Default for FidelityRamp {
    fn default() -> Self {
        Self {
            lo: 0.98,
            hi: 0.995,
            period: 8.0,
            threshold: 0.95,
        }
    }
}

impl FidelityRamp {
    pub fn fidelity(&self, t: f64) -> f64 {
        self.lo + (self.hi - self.lo) * (2.0 * PI * t / self.period).sin()
    }

    /// `n` evenly spaced `(t, fidelity)` samples over `[0, period]`,
    /// endpoints included.
    pub fn samples(&self, n: usize) -> Vec<(f64, f64)> {
        (0..n)
            .map(|i| {
                let t = if n > 1 {
                    self.period * i as f64 / (n - 1) as f64
                } else {
                    0.0
                };
                (t, self.fidelity(t))
            })
            .collect()
    }

    /// Forward (compute) half of the cycle.
    pub fn forward_span(&self) -> (f64, f64) {
        (0.0, self.period / 2.0)
    }

    /// Reverse (uncompute/recover) half of the cycle.
    pub fn reverse_span(&self) -> (f64, f64) {
        (self.period / 2.0, self.period)
    }
}
