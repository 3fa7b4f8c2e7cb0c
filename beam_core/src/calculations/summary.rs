//! Diagram Summary
//!
//! Peak values of a [`ResultSequence`] for summary cards, plus the two
//! derived display quantities front ends ask for most: peak bending stress
//! and the span/deflection ratio.

use serde::{Deserialize, Serialize};

use super::diagrams::{ResultSequence, Sample};
use crate::units::{bending_stress, Cm3, KnMeters};

/// The largest-magnitude value of one quantity and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Peak {
    /// Signed value with the largest magnitude
    pub value: f64,
    /// Position of the first sample holding it (m)
    pub position_m: f64,
}

impl Peak {
    fn of(diagrams: &ResultSequence, field: impl Fn(&Sample) -> f64) -> Self {
        diagrams.iter().fold(Peak::default(), |peak, sample| {
            let value = field(sample);
            if value.abs() > peak.value.abs() {
                Peak {
                    value,
                    position_m: sample.position_m,
                }
            } else {
                peak
            }
        })
    }
}

/// Extreme values of every curve
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagramSummary {
    /// Shear force (kN)
    pub shear_kn: Peak,
    /// Bending moment (kN·m)
    pub moment_knm: Peak,
    /// Slope (rad)
    pub slope_rad: Peak,
    /// Deflection (mm)
    pub deflection_mm: Peak,
}

impl DiagramSummary {
    /// Peak bending stress σ = |M|/S in MPa; `None` without a usable section modulus
    pub fn peak_bending_stress_mpa(&self, section_modulus_cm3: f64) -> Option<f64> {
        if !section_modulus_cm3.is_finite() || section_modulus_cm3 <= 0.0 {
            return None;
        }
        let stress = bending_stress(KnMeters(self.moment_knm.value.abs()), Cm3(section_modulus_cm3));
        Some(stress.value())
    }

    /// L/δ (span over peak deflection, both in mm); `None` when nothing deflects
    pub fn span_deflection_ratio(&self, length_m: f64) -> Option<f64> {
        let deflection_mm = self.deflection_mm.value.abs();
        if deflection_mm == 0.0 {
            return None;
        }
        Some(length_m * 1000.0 / deflection_mm)
    }
}

/// Collect the peaks of every curve.
///
/// Ties keep the first (left-most) sample.
pub fn summarize(diagrams: &ResultSequence) -> DiagramSummary {
    DiagramSummary {
        shear_kn: Peak::of(diagrams, |s| s.shear_kn),
        moment_knm: Peak::of(diagrams, |s| s.moment_knm),
        slope_rad: Peak::of(diagrams, |s| s.slope_rad),
        deflection_mm: Peak::of(diagrams, |s| s.deflection_mm),
    }
}
