//! # Analysis Settings
//!
//! Tunable constants for a diagram computation. None of these are physical
//! inputs; they control resolution and how numerical noise is cleaned up.

use serde::{Deserialize, Serialize};

/// Default number of intervals the span is divided into.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Upper bound on the number of intervals.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Default magnitude below which shear (kN), moment (kN·m) and deflection (mm)
/// are reported as exactly zero.
pub const DEFAULT_ZERO_SNAP_TOLERANCE: f64 = 1.0e-5;

/// Default magnitude (rad) below which slope is reported as exactly zero.
/// Matches the deflection tolerance once mm is taken back to m.
pub const DEFAULT_SLOPE_SNAP_TOLERANCE_RAD: f64 = 1.0e-8;

/// Default separation (m) below which two simple supports count as coincident.
pub const DEFAULT_SUPPORT_TOLERANCE_M: f64 = 1.0e-9;

/// Settings that shape a diagram computation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sample_count": 200,
///   "zero_snap_tolerance": 1e-5,
///   "slope_snap_tolerance_rad": 1e-8,
///   "support_tolerance_m": 1e-9
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of intervals N; the result holds N+1 samples
    pub sample_count: usize,

    /// Shear, moment and deflection with a smaller magnitude are snapped to 0.0
    pub zero_snap_tolerance: f64,

    /// Slopes with a smaller magnitude are snapped to 0.0
    pub slope_snap_tolerance_rad: f64,

    /// Simple supports closer than this are treated as degenerate
    pub support_tolerance_m: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            zero_snap_tolerance: DEFAULT_ZERO_SNAP_TOLERANCE,
            slope_snap_tolerance_rad: DEFAULT_SLOPE_SNAP_TOLERANCE_RAD,
            support_tolerance_m: DEFAULT_SUPPORT_TOLERANCE_M,
        }
    }
}

impl AnalysisSettings {
    /// Default settings with a specific resolution
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Override the zero-snap tolerance
    pub fn with_zero_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_snap_tolerance = tolerance;
        self
    }

    /// Sample count actually used: between one and `MAX_SAMPLE_COUNT`
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count.clamp(1, MAX_SAMPLE_COUNT)
    }

    /// Replace values smaller than the snap tolerance with exactly zero.
    ///
    /// Non-finite values also collapse to zero so nothing downstream has to
    /// render NaN or infinity.
    pub fn snap(&self, value: f64) -> f64 {
        snap_below(value, self.zero_snap_tolerance)
    }

    /// `snap` for slopes, which live on a much smaller scale than mm
    pub fn snap_slope(&self, value: f64) -> f64 {
        snap_below(value, self.slope_snap_tolerance_rad)
    }
}

fn snap_below(value: f64, tolerance: f64) -> f64 {
    if !value.is_finite() || value.abs() < tolerance {
        0.0
    } else {
        value
    }
}
