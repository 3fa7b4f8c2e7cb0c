//! # Shear, Moment, Slope and Deflection Diagrams
//!
//! Sweeps the span at `N + 1` uniform sample points and builds the response
//! curve in two passes:
//!
//! 1. **Internal forces** by the method of sections: cut at `x`, sum every
//!    reaction and load strictly to the left of the cut.
//! 2. **Deformation** by integrating `M/EI` twice with the trapezoidal rule,
//!    then fixing the two free constants from the support conditions.
//!
//! ## Sign Convention
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on bottom fiber)
//! - Positive slope and deflection: upward, so gravity loads deflect negative
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::beam::BeamSpec;
//! use beam_core::calculations::diagrams::compute_diagrams;
//! use beam_core::loads::Load;
//!
//! let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::point(10.0, 5.0));
//! let diagrams = compute_diagrams(&spec, 100);
//!
//! assert_eq!(diagrams.len(), 101);
//! let midspan = &diagrams.samples()[50];
//! assert!((midspan.moment_knm - 25.0).abs() < 1e-9);
//! assert!(midspan.deflection_mm < 0.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::beam::{BeamSpec, SupportKind};
use super::reactions::{compute_reactions_with, Reactions};
use crate::settings::AnalysisSettings;
use crate::units::{Meters, Millimeters};

/// One point on the response curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Distance from the left end (m)
    pub position_m: f64,
    /// Internal shear force (kN)
    pub shear_kn: f64,
    /// Internal bending moment (kN·m)
    pub moment_knm: f64,
    /// Rotation of the neutral axis (rad)
    pub slope_rad: f64,
    /// Transverse displacement of the neutral axis (mm)
    pub deflection_mm: f64,
}

/// Uniformly spaced samples from x = 0 to x = length, position-ascending
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSequence {
    spacing_m: f64,
    samples: Vec<Sample>,
}

impl ResultSequence {
    /// All samples, first at 0 and last at the beam length
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples (sample count + 1)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True for a sequence with no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Distance between neighbouring samples (m)
    pub fn spacing_m(&self) -> f64 {
        self.spacing_m
    }

    /// Index of the sample closest to `x_m`
    pub fn nearest_index(&self, x_m: f64) -> usize {
        nearest_index(x_m, self.spacing_m, self.samples.len().saturating_sub(1))
    }

    /// The sample closest to `x_m`
    pub fn sample_near(&self, x_m: f64) -> Option<&Sample> {
        self.samples.get(self.nearest_index(x_m))
    }

    /// Consume the sequence, keeping only the samples
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a ResultSequence {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

fn nearest_index(x_m: f64, spacing_m: f64, last: usize) -> usize {
    let index = (x_m / spacing_m).round();
    // NaN (zero spacing) lands on 0 through the saturating cast
    index.clamp(0.0, last as f64) as usize
}

/// Diagrams with default tolerances and the given resolution.
///
/// `sample_count` below 1 is treated as 1.
pub fn compute_diagrams(spec: &BeamSpec, sample_count: usize) -> ResultSequence {
    compute_diagrams_with(spec, &AnalysisSettings::default().with_sample_count(sample_count))
}

/// Diagrams with explicit settings; solves the reactions first
pub fn compute_diagrams_with(spec: &BeamSpec, settings: &AnalysisSettings) -> ResultSequence {
    let reactions = compute_reactions_with(spec, settings);
    diagrams_from_reactions(spec, reactions, settings)
}

/// Diagrams for reactions that have already been solved
pub fn diagrams_from_reactions(spec: &BeamSpec, reactions: Reactions, settings: &AnalysisSettings) -> ResultSequence {
    let n = settings.effective_sample_count();
    let spacing_m = spec.length_m / n as f64;
    let positions: Vec<f64> = (0..=n).map(|i| spec.length_m * i as f64 / n as f64).collect();

    // === Pass 1: internal forces ===
    let reaction_forces = reactions.forces(spec);
    let wall = reactions
        .fixed_end_position_m(spec)
        .map(|position_m| (position_m, reactions.moment_a_knm()));

    let forces: Vec<(f64, f64)> = positions
        .iter()
        .map(|&x| {
            let mut shear = 0.0;
            let mut moment = 0.0;

            for &(position_m, force_kn) in &reaction_forces {
                if position_m < x {
                    shear += force_kn;
                    moment += force_kn * (x - position_m);
                }
            }
            // The wall couple acts on the left free body like an applied CCW moment
            if let Some((position_m, moment_knm)) = wall {
                if position_m < x {
                    moment -= moment_knm;
                }
            }
            for load in &spec.loads {
                let (v, m) = load.section_effect(x);
                shear += v;
                moment += m;
            }

            (shear, moment)
        })
        .collect();

    // === Pass 2: slope and deflection ===
    let (slopes, deflections) = integrate_deformation(spec, &positions, &forces, spacing_m, settings);

    let samples = positions
        .iter()
        .zip(&forces)
        .zip(slopes.iter().zip(&deflections))
        .map(|((&position_m, &(shear, moment)), (&slope, &deflection))| Sample {
            position_m,
            shear_kn: settings.snap(shear),
            moment_knm: settings.snap(moment),
            slope_rad: settings.snap_slope(slope),
            deflection_mm: settings.snap(Millimeters::from(Meters(deflection)).value()),
        })
        .collect();

    ResultSequence { spacing_m, samples }
}

/// Slope (rad) and deflection (m) at each sample, boundary conditions applied.
///
/// Returns all zeros when the deformation is undefined: no usable EI, or
/// simple supports that coincide.
fn integrate_deformation(
    spec: &BeamSpec,
    positions: &[f64],
    forces: &[(f64, f64)],
    spacing_m: f64,
    settings: &AnalysisSettings,
) -> (Vec<f64>, Vec<f64>) {
    let zeros = || (vec![0.0; positions.len()], vec![0.0; positions.len()]);

    let ei = spec.flexural_stiffness_knm2();
    if !ei.is_finite() || ei <= 0.0 {
        debug!("flexural stiffness {} kN·m² is not usable, deformation left at zero", ei);
        return zeros();
    }

    // Running integrals before the constants are known
    let mut theta = vec![0.0; positions.len()];
    let mut y = vec![0.0; positions.len()];
    for i in 1..positions.len() {
        let mean_curvature = (forces[i - 1].1 + forces[i].1) / 2.0 / ei;
        theta[i] = theta[i - 1] + mean_curvature * spacing_m;
        y[i] = y[i - 1] + theta[i] * spacing_m;
    }

    let Some((c1, c2)) = boundary_constants(spec, positions, &theta, &y, spacing_m, settings) else {
        return zeros();
    };
    debug!("integration constants: C1 = {:e}, C2 = {:e}", c1, c2);

    let slopes = theta.iter().map(|t| t + c1).collect();
    let deflections = y
        .iter()
        .zip(positions)
        .map(|(y0, &x)| y0 + c1 * x + c2)
        .collect();
    (slopes, deflections)
}

/// Solve C1 (slope offset) and C2 (deflection offset) from the supports.
///
/// A wall is fixed at its nearest sample. Simple supports pin the raw curve
/// at their actual coordinates, read between samples, so supports closer
/// together than one interval still get a proper solve.
fn boundary_constants(
    spec: &BeamSpec,
    positions: &[f64],
    theta: &[f64],
    y: &[f64],
    spacing_m: f64,
    settings: &AnalysisSettings,
) -> Option<(f64, f64)> {
    let last = positions.len() - 1;

    match spec.support_kind {
        SupportKind::Simple => {
            let lever_m = spec.support_b_m - spec.support_a_m;
            if lever_m.abs() < settings.support_tolerance_m {
                debug!("simple supports coincide, deflection undefined");
                return None;
            }
            // y(a) = 0 and y(b) = 0
            let y_a = interpolate(positions, y, spec.support_a_m, spacing_m);
            let y_b = interpolate(positions, y, spec.support_b_m, spacing_m);
            let c1 = (y_a - y_b) / lever_m;
            let c2 = -y_a - c1 * spec.support_a_m;
            Some((c1, c2))
        }
        SupportKind::CantileverFixedLeft => {
            let i = nearest_index(spec.support_a_m, spacing_m, last);
            let c1 = -theta[i];
            Some((c1, -y[i] - c1 * positions[i]))
        }
        SupportKind::CantileverFixedRight => {
            let c1 = -theta[last];
            Some((c1, -y[last] - c1 * positions[last]))
        }
    }
}

/// Linear reading of `values` at `x_m`, held to the sampled range
fn interpolate(positions: &[f64], values: &[f64], x_m: f64, spacing_m: f64) -> f64 {
    let last = positions.len() - 1;
    if last == 0 || !(spacing_m > 0.0 && spacing_m.is_finite()) {
        return values[0];
    }
    let x_m = x_m.clamp(positions[0], positions[last]);
    let left = ((x_m / spacing_m).floor().max(0.0) as usize).min(last - 1);
    let t = (x_m - positions[left]) / spacing_m;
    values[left] + (values[left + 1] - values[left]) * t
}
