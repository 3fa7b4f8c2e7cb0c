//! # Beam Definition
//!
//! A straight, prismatic beam on one of three support configurations,
//! carrying any number of [`Load`]s.
//!
//! ## Assumptions
//!
//! - Small-deflection Euler-Bernoulli theory, linear-elastic material
//! - Constant EI along the span
//! - Two restraints at most (pin + roller, or one built-in end)
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{BeamSpec, SupportKind};
//! use beam_core::loads::Load;
//!
//! // 6 m simply-supported steel beam, IPE 300
//! let spec = BeamSpec::simple(6.0, 0.0, 6.0)
//!     .with_section(210.0, 8356.0)
//!     .with_load(Load::point(25.0, 2.0))
//!     .with_load(Load::distributed(4.0, 0.0, 6.0));
//!
//! assert_eq!(spec.support_kind, SupportKind::Simple);
//! assert!(spec.validate().is_ok());
//! assert!((spec.total_downward_force_kn() - 49.0).abs() < 1e-12);
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;
use crate::settings::DEFAULT_SUPPORT_TOLERANCE_M;
use crate::units::{flexural_stiffness, Cm4, Gigapascals};

/// Default material modulus (GPa): structural steel
pub const DEFAULT_ELASTIC_MODULUS_GPA: f64 = 210.0;

/// Default second moment of area (cm⁴): IPE 300
pub const DEFAULT_SECOND_MOMENT_CM4: f64 = 8356.0;

// =============================================================================
// SUPPORT KIND
// =============================================================================

/// How the beam is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportKind {
    /// Pin at `support_a_m`, roller at `support_b_m`
    ///
    /// - Deflection restrained at both supports
    /// - Rotation free at both
    #[default]
    Simple,

    /// Built-in end at `support_a_m`, everything else free
    ///
    /// - Deflection and rotation restrained at the wall
    /// - Creates a moment reaction at the wall
    CantileverFixedLeft,

    /// Built-in end at the right end of the span (x = length)
    CantileverFixedRight,
}

impl SupportKind {
    /// All available support kinds for UI selection
    pub const ALL: [SupportKind; 3] = [
        SupportKind::Simple,
        SupportKind::CantileverFixedLeft,
        SupportKind::CantileverFixedRight,
    ];

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Simple => "Simply supported",
            SupportKind::CantileverFixedLeft => "Cantilever (fixed left)",
            SupportKind::CantileverFixedRight => "Cantilever (fixed right)",
        }
    }

    /// Returns true if one end is built in
    pub fn is_cantilever(&self) -> bool {
        !matches!(self, SupportKind::Simple)
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// BEAM SPEC
// =============================================================================

/// Everything the engine needs to know about one beam.
///
/// Built fresh for every computation; the engine never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamSpec {
    /// Span length in metres
    pub length_m: f64,

    /// Support configuration
    pub support_kind: SupportKind,

    /// Pin (Simple) or wall (CantileverFixedLeft) position in metres
    pub support_a_m: f64,

    /// Roller position in metres; only meaningful for `Simple`
    pub support_b_m: f64,

    /// Material modulus of elasticity E in GPa
    pub elastic_modulus_gpa: f64,

    /// Section second moment of area I in cm⁴
    pub second_moment_cm4: f64,

    /// Applied loads
    pub loads: Vec<Load>,
}

impl BeamSpec {
    /// Simply-supported beam with the pin and roller at the given positions
    pub fn simple(length_m: f64, support_a_m: f64, support_b_m: f64) -> Self {
        Self::with_kind(length_m, SupportKind::Simple, support_a_m, support_b_m)
    }

    /// Cantilever built in at `support_a_m` (normally 0)
    pub fn cantilever_left(length_m: f64, support_a_m: f64) -> Self {
        Self::with_kind(length_m, SupportKind::CantileverFixedLeft, support_a_m, length_m)
    }

    /// Cantilever built in at the right end
    pub fn cantilever_right(length_m: f64) -> Self {
        Self::with_kind(length_m, SupportKind::CantileverFixedRight, 0.0, length_m)
    }

    fn with_kind(length_m: f64, support_kind: SupportKind, support_a_m: f64, support_b_m: f64) -> Self {
        BeamSpec {
            length_m,
            support_kind,
            support_a_m,
            support_b_m,
            elastic_modulus_gpa: DEFAULT_ELASTIC_MODULUS_GPA,
            second_moment_cm4: DEFAULT_SECOND_MOMENT_CM4,
            loads: Vec::new(),
        }
    }

    /// Set the material modulus (GPa) and second moment of area (cm⁴)
    pub fn with_section(mut self, elastic_modulus_gpa: f64, second_moment_cm4: f64) -> Self {
        self.elastic_modulus_gpa = elastic_modulus_gpa;
        self.second_moment_cm4 = second_moment_cm4;
        self
    }

    /// Add a load (builder style)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Add a load
    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
    }

    /// Flexural stiffness EI in kN·m²
    pub fn flexural_stiffness_knm2(&self) -> f64 {
        flexural_stiffness(
            Gigapascals(self.elastic_modulus_gpa),
            Cm4(self.second_moment_cm4),
        )
        .value()
    }

    /// Sum of all transverse load resultants (kN, downward positive)
    pub fn total_downward_force_kn(&self) -> f64 {
        self.loads.iter().map(Load::resultant_kn).sum()
    }

    /// Sum of the counter-clockwise moments of all loads about `pivot_m`
    pub fn load_moment_about_knm(&self, pivot_m: f64) -> f64 {
        self.loads.iter().map(|load| load.moment_about_knm(pivot_m)).sum()
    }

    /// Validate the definition.
    ///
    /// The engine does not call this: it produces a defined result for any
    /// input. Front ends call it to flag definitions a user probably did not
    /// mean.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        check_on_span("support_a_m", self.support_a_m, self.length_m)?;
        if self.support_kind == SupportKind::Simple {
            check_on_span("support_b_m", self.support_b_m, self.length_m)?;
            if (self.support_b_m - self.support_a_m).abs() < DEFAULT_SUPPORT_TOLERANCE_M {
                return Err(CalcError::degenerate(format!(
                    "pin and roller coincide at {} m",
                    self.support_a_m
                )));
            }
        }
        if !self.elastic_modulus_gpa.is_finite() || self.elastic_modulus_gpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "elastic_modulus_gpa",
                self.elastic_modulus_gpa.to_string(),
                "Modulus of elasticity must be positive",
            ));
        }
        if !self.second_moment_cm4.is_finite() || self.second_moment_cm4 <= 0.0 {
            return Err(CalcError::invalid_input(
                "second_moment_cm4",
                self.second_moment_cm4.to_string(),
                "Second moment of area must be positive",
            ));
        }

        for (index, load) in self.loads.iter().enumerate() {
            let field = format!("loads[{}]", index);
            if !load.is_finite() {
                return Err(CalcError::invalid_input(field, load.to_string(), "Load values must be finite"));
            }
            check_on_span(&field, load.position_m(), self.length_m)?;
            if let Load::Distributed { span_m, .. } = *load {
                if span_m < 0.0 {
                    return Err(CalcError::invalid_input(field, span_m.to_string(), "Loaded length must not be negative"));
                }
                if load.end_m() > self.length_m {
                    return Err(CalcError::invalid_input(
                        field,
                        load.end_m().to_string(),
                        "Distributed load runs past the end of the beam",
                    ));
                }
            }
        }
        Ok(())
    }
}

fn check_on_span(field: &str, position_m: f64, length_m: f64) -> CalcResult<()> {
    if !position_m.is_finite() || position_m < 0.0 || position_m > length_m {
        return Err(CalcError::invalid_input(
            field,
            position_m.to_string(),
            format!("Position must lie within 0..{} m", length_m),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_beam() -> BeamSpec {
        BeamSpec::simple(10.0, 0.0, 10.0)
            .with_load(Load::point(10.0, 5.0))
            .with_load(Load::distributed(2.0, 0.0, 10.0))
    }

    #[test]
    fn test_constructors() {
        let left = BeamSpec::cantilever_left(4.0, 0.0);
        assert_eq!(left.support_kind, SupportKind::CantileverFixedLeft);
        assert!(left.support_kind.is_cantilever());

        let right = BeamSpec::cantilever_right(4.0);
        assert_eq!(right.support_kind, SupportKind::CantileverFixedRight);
        assert!(right.loads.is_empty());
    }

    #[test]
    fn test_flexural_stiffness() {
        let beam = BeamSpec::simple(5.0, 0.0, 5.0).with_section(200.0, 10_000.0);
        assert_relative_eq!(beam.flexural_stiffness_knm2(), 20_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_total_force_and_moment() {
        let beam = test_beam().with_load(Load::moment(3.0, 2.0));
        assert_relative_eq!(beam.total_downward_force_kn(), 30.0);
        // -10*5 - 20*5 + 3
        assert_relative_eq!(beam.load_moment_about_knm(0.0), -147.0);
    }

    #[test]
    fn test_valid_beam() {
        assert!(test_beam().validate().is_ok());
        assert!(BeamSpec::cantilever_right(3.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_length() {
        let mut beam = test_beam();
        beam.length_m = 0.0;
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_coincident_supports() {
        let beam = BeamSpec::simple(10.0, 4.0, 4.0);
        let err = beam.validate().unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
    }

    #[test]
    fn test_support_outside_span() {
        let beam = BeamSpec::simple(10.0, 0.0, 12.0);
        assert!(beam.validate().is_err());
    }

    #[test]
    fn test_zero_section() {
        let beam = test_beam().with_section(210.0, 0.0);
        match beam.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "second_moment_cm4"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_load_past_end() {
        let beam = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::distributed(1.0, 8.0, 4.0));
        match beam.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "loads[0]"),
            other => panic!("unexpected: {:?}", other),
        }

        let beam = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::point(1.0, -1.0));
        assert!(beam.validate().is_err());
    }
}
