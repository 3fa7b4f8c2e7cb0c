//! # Unit Types
//!
//! Type-safe wrappers for the engineering units the engine works in. These
//! are plain `f64` newtypes that serialize as bare numbers.
//!
//! ## SI Units
//!
//! Beam definitions are entered in SI-derived engineering units:
//! - Length: metres (m), millimetres (mm) for deflection output
//! - Force: kilonewtons (kN)
//! - Distributed load: kilonewtons per metre (kN/m)
//! - Moment: kilonewton-metres (kN·m)
//! - Stiffness: gigapascals (GPa) for E, megapascals (MPa) for stress
//! - Section: cm⁴ for second moment of area, cm³ for section modulus
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{flexural_stiffness, Cm4, Gigapascals, Meters, Millimeters};
//!
//! let deflection: Millimeters = Meters(0.0125).into();
//! assert!((deflection.0 - 12.5).abs() < 1e-12);
//!
//! // Steel, I = 8356 cm⁴ (IPE 300)
//! let ei = flexural_stiffness(Gigapascals(210.0), Cm4(8356.0));
//! assert!((ei.0 - 17_547.6).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force and Moment Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerMeter(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnMeters(pub f64);

impl KnPerMeter {
    /// Resultant force of this intensity acting over `span`
    pub fn over(self, span: Meters) -> KiloNewtons {
        KiloNewtons(self.0 * span.0)
    }
}

impl KiloNewtons {
    /// Moment of this force about a point `arm` away
    pub fn at_arm(self, arm: Meters) -> KnMeters {
        KnMeters(self.0 * arm.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in gigapascals (1 GPa = 1e6 kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

/// Stress in megapascals (1 MPa = 1e3 kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Gigapascals> for Megapascals {
    fn from(gpa: Gigapascals) -> Self {
        Megapascals(gpa.0 * 1000.0)
    }
}

impl From<Megapascals> for Gigapascals {
    fn from(mpa: Megapascals) -> Self {
        Gigapascals(mpa.0 / 1000.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Second moment of area in cm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

/// Section modulus in cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm3(pub f64);

/// Flexural stiffness EI in kN·m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM2(pub f64);

/// EI from a material modulus and a section's second moment of area.
///
/// E [GPa] = E·1e6 kN/m², I [cm⁴] = I·1e-8 m⁴, so EI [kN·m²] = E·I·1e-2.
pub fn flexural_stiffness(e: Gigapascals, i: Cm4) -> KnM2 {
    KnM2(e.0 * 1.0e6 * i.0 * 1.0e-8)
}

/// Bending stress σ = M/S.
///
/// M [kN·m] / S [cm³ = 1e-6 m³] gives kN/m², divided by 1e3 for MPa.
pub fn bending_stress(moment: KnMeters, section_modulus: Cm3) -> Megapascals {
    Megapascals(moment.0 / (section_modulus.0 * 1.0e-6) / 1000.0)
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(KnPerMeter);
impl_arithmetic!(KnMeters);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Cm4);
impl_arithmetic!(Cm3);
impl_arithmetic!(KnM2);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meters_to_millimeters() {
        let m = Meters(0.25);
        let mm: Millimeters = m.into();
        assert_relative_eq!(mm.0, 250.0);

        let back: Meters = mm.into();
        assert_relative_eq!(back.0, 0.25);
    }

    #[test]
    fn test_flexural_stiffness() {
        // 200 GPa, 1e4 cm⁴ (1e-4 m⁴) -> 2e11 Pa * 1e-4 = 2e7 N·m² = 2e4 kN·m²
        let ei = flexural_stiffness(Gigapascals(200.0), Cm4(10_000.0));
        assert_relative_eq!(ei.0, 20_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_bending_stress() {
        // 100 kN·m on S = 1000 cm³ -> 1e5 N·m / 1e-3 m³ = 1e8 Pa = 100 MPa
        let sigma = bending_stress(KnMeters(100.0), Cm3(1000.0));
        assert_relative_eq!(sigma.0, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_force_helpers() {
        let w = KnPerMeter(2.0);
        let resultant = w.over(Meters(10.0));
        assert_relative_eq!(resultant.0, 20.0);
        assert_relative_eq!(resultant.at_arm(Meters(5.0)).0, 100.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
