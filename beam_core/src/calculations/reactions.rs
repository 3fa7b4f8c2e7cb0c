//! # Support Reactions
//!
//! Static equilibrium for the three support configurations. Every solve is a
//! moment balance about the restraint that carries the unknown moment (or,
//! for a simple span, about the pin), followed by a vertical force balance.
//!
//! ## Sign Convention
//! - Reaction forces: positive upward
//! - Reaction moments: positive counter-clockwise
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::beam::BeamSpec;
//! use beam_core::calculations::reactions::compute_reactions;
//! use beam_core::loads::Load;
//!
//! let spec = BeamSpec::cantilever_left(10.0, 0.0).with_load(Load::point(10.0, 10.0));
//! let reactions = compute_reactions(&spec);
//!
//! assert!((reactions.vertical_a_kn() - 10.0).abs() < 1e-12);
//! assert!((reactions.moment_a_knm() - 100.0).abs() < 1e-12);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::beam::{BeamSpec, SupportKind};
use crate::settings::AnalysisSettings;

/// Support reactions, tagged by the configuration that produced them.
///
/// ## JSON Example
///
/// ```json
/// { "type": "FixedLeft", "vertical_kn": 10.0, "moment_knm": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reactions {
    /// Pin at `support_a_m`, roller at `support_b_m`
    Simple { vertical_a_kn: f64, vertical_b_kn: f64 },

    /// Wall at `support_a_m`
    FixedLeft { vertical_kn: f64, moment_knm: f64 },

    /// Wall at x = length
    FixedRight { vertical_kn: f64, moment_knm: f64 },
}

impl Reactions {
    /// All-zero reactions for a configuration
    pub fn zero(kind: SupportKind) -> Self {
        match kind {
            SupportKind::Simple => Reactions::Simple {
                vertical_a_kn: 0.0,
                vertical_b_kn: 0.0,
            },
            SupportKind::CantileverFixedLeft => Reactions::FixedLeft {
                vertical_kn: 0.0,
                moment_knm: 0.0,
            },
            SupportKind::CantileverFixedRight => Reactions::FixedRight {
                vertical_kn: 0.0,
                moment_knm: 0.0,
            },
        }
    }

    /// Vertical reaction in the "A" slot (pin or left wall; zero for a right wall)
    pub fn vertical_a_kn(&self) -> f64 {
        match *self {
            Reactions::Simple { vertical_a_kn, .. } => vertical_a_kn,
            Reactions::FixedLeft { vertical_kn, .. } => vertical_kn,
            Reactions::FixedRight { .. } => 0.0,
        }
    }

    /// Vertical reaction in the "B" slot (roller or right wall; zero for a left wall)
    pub fn vertical_b_kn(&self) -> f64 {
        match *self {
            Reactions::Simple { vertical_b_kn, .. } => vertical_b_kn,
            Reactions::FixedLeft { .. } => 0.0,
            Reactions::FixedRight { vertical_kn, .. } => vertical_kn,
        }
    }

    /// Wall reaction moment, whichever end the wall is at; zero for a simple span
    pub fn moment_a_knm(&self) -> f64 {
        match *self {
            Reactions::Simple { .. } => 0.0,
            Reactions::FixedLeft { moment_knm, .. } | Reactions::FixedRight { moment_knm, .. } => moment_knm,
        }
    }

    /// Sum of vertical reactions (kN, upward positive)
    pub fn total_vertical_kn(&self) -> f64 {
        self.vertical_a_kn() + self.vertical_b_kn()
    }

    /// Where the wall is, for cantilevers
    pub fn fixed_end_position_m(&self, spec: &BeamSpec) -> Option<f64> {
        match self {
            Reactions::Simple { .. } => None,
            Reactions::FixedLeft { .. } => Some(spec.support_a_m),
            Reactions::FixedRight { .. } => Some(spec.length_m),
        }
    }

    /// Point forces as (position m, upward force kN)
    pub fn forces(&self, spec: &BeamSpec) -> Vec<(f64, f64)> {
        match *self {
            Reactions::Simple {
                vertical_a_kn,
                vertical_b_kn,
            } => vec![(spec.support_a_m, vertical_a_kn), (spec.support_b_m, vertical_b_kn)],
            Reactions::FixedLeft { vertical_kn, .. } => vec![(spec.support_a_m, vertical_kn)],
            Reactions::FixedRight { vertical_kn, .. } => vec![(spec.length_m, vertical_kn)],
        }
    }

    /// True when every reaction is exactly zero
    pub fn is_zero(&self) -> bool {
        self.vertical_a_kn() == 0.0 && self.vertical_b_kn() == 0.0 && self.moment_a_knm() == 0.0
    }

    /// Out-of-balance force and moment of loads plus reactions.
    ///
    /// Both are zero (to rounding) for reactions from [`compute_reactions`]
    /// on a non-degenerate beam. Moments are taken about x = 0.
    pub fn residuals(&self, spec: &BeamSpec) -> Residuals {
        let force_kn = self.total_vertical_kn() - spec.total_downward_force_kn();

        // Upward force at p turns counter-clockwise about the origin
        let reaction_moment: f64 = self
            .forces(spec)
            .iter()
            .map(|&(position_m, force_kn)| force_kn * position_m)
            .sum();
        let moment_knm = reaction_moment + self.moment_a_knm() + spec.load_moment_about_knm(0.0);

        Residuals { force_kn, moment_knm }
    }
}

/// Equilibrium check result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Residuals {
    /// ΣFy (kN)
    pub force_kn: f64,
    /// ΣM about x = 0 (kN·m)
    pub moment_knm: f64,
}

/// Support reactions using default settings.
///
/// Never fails: coincident simple supports give all-zero reactions.
pub fn compute_reactions(spec: &BeamSpec) -> Reactions {
    compute_reactions_with(spec, &AnalysisSettings::default())
}

/// Support reactions with explicit settings
pub fn compute_reactions_with(spec: &BeamSpec, settings: &AnalysisSettings) -> Reactions {
    let total_kn = spec.total_downward_force_kn();

    let reactions = match spec.support_kind {
        SupportKind::Simple => {
            let lever_m = spec.support_b_m - spec.support_a_m;
            if lever_m.abs() < settings.support_tolerance_m {
                debug!(
                    "simple supports coincide at {} m, returning zero reactions",
                    spec.support_a_m
                );
                return Reactions::zero(SupportKind::Simple);
            }
            // ΣM_A = 0: S + R_B·(b - a) = 0
            let sum_about_a = spec.load_moment_about_knm(spec.support_a_m);
            let vertical_b_kn = -sum_about_a / lever_m;
            Reactions::Simple {
                vertical_a_kn: total_kn - vertical_b_kn,
                vertical_b_kn,
            }
        }
        SupportKind::CantileverFixedLeft => Reactions::FixedLeft {
            vertical_kn: total_kn,
            moment_knm: -spec.load_moment_about_knm(spec.support_a_m),
        },
        SupportKind::CantileverFixedRight => Reactions::FixedRight {
            vertical_kn: total_kn,
            moment_knm: -spec.load_moment_about_knm(spec.length_m),
        },
    };

    debug!("{} reactions: {:?}", spec.support_kind, reactions);
    reactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Load;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_simple_point_midspan() {
        let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::point(10.0, 5.0));
        let reactions = compute_reactions(&spec);

        assert_relative_eq!(reactions.vertical_a_kn(), 5.0);
        assert_relative_eq!(reactions.vertical_b_kn(), 5.0);
        assert_eq!(reactions.moment_a_knm(), 0.0);
    }

    #[test]
    fn test_simple_point_asymmetric() {
        // R1 = P(L-a)/L = 7, R2 = Pa/L = 3
        let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::point(10.0, 3.0));
        let reactions = compute_reactions(&spec);

        assert_relative_eq!(reactions.vertical_a_kn(), 7.0, max_relative = 1e-12);
        assert_relative_eq!(reactions.vertical_b_kn(), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_simple_full_udl() {
        let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::distributed(2.0, 0.0, 10.0));
        let reactions = compute_reactions(&spec);

        assert_relative_eq!(reactions.vertical_a_kn(), 10.0);
        assert_relative_eq!(reactions.vertical_b_kn(), 10.0);
    }

    #[test]
    fn test_simple_applied_moment() {
        // CCW couple: R_B = -M/L, R_A = +M/L
        let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::moment(20.0, 4.0));
        let reactions = compute_reactions(&spec);

        assert_relative_eq!(reactions.vertical_a_kn(), 2.0);
        assert_relative_eq!(reactions.vertical_b_kn(), -2.0);
    }

    #[test]
    fn test_simple_with_overhang() {
        // Supports at 2 and 8, tip load at 10: R_B = 10*8/6, R_A = 10 - R_B
        let spec = BeamSpec::simple(10.0, 2.0, 8.0).with_load(Load::point(10.0, 10.0));
        let reactions = compute_reactions(&spec);

        assert_relative_eq!(reactions.vertical_b_kn(), 80.0 / 6.0, max_relative = 1e-12);
        assert_relative_eq!(reactions.vertical_a_kn(), 10.0 - 80.0 / 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_supports() {
        let spec = BeamSpec::simple(10.0, 5.0, 5.0).with_load(Load::point(10.0, 2.0));
        let reactions = compute_reactions(&spec);

        assert!(reactions.is_zero());
        assert!(matches!(reactions, Reactions::Simple { .. }));
    }

    #[test]
    fn test_cantilever_left_tip_load() {
        let spec = BeamSpec::cantilever_left(10.0, 0.0).with_load(Load::point(10.0, 10.0));
        let reactions = compute_reactions(&spec);

        assert_relative_eq!(reactions.vertical_a_kn(), 10.0);
        assert_relative_eq!(reactions.moment_a_knm(), 100.0);
        assert_eq!(reactions.vertical_b_kn(), 0.0);
        assert_eq!(reactions.fixed_end_position_m(&spec), Some(0.0));
    }

    #[test]
    fn test_cantilever_right_tip_load() {
        // Load at the free (left) end turns CCW about the wall, so the wall resists CW
        let spec = BeamSpec::cantilever_right(10.0).with_load(Load::point(10.0, 0.0));
        let reactions = compute_reactions(&spec);

        assert_eq!(reactions.vertical_a_kn(), 0.0);
        assert_relative_eq!(reactions.vertical_b_kn(), 10.0);
        assert_relative_eq!(reactions.moment_a_knm(), -100.0);
        assert_eq!(reactions.fixed_end_position_m(&spec), Some(10.0));
    }

    #[test]
    fn test_cantilever_udl_and_couple() {
        let spec = BeamSpec::cantilever_left(4.0, 0.0)
            .with_load(Load::distributed(3.0, 0.0, 4.0))
            .with_load(Load::moment(5.0, 2.0));
        let reactions = compute_reactions(&spec);

        // S = -12*2 + 5 = -19
        assert_relative_eq!(reactions.vertical_a_kn(), 12.0);
        assert_relative_eq!(reactions.moment_a_knm(), 19.0);
    }

    #[test]
    fn test_equilibrium_residuals() {
        let loads = [
            Load::point(12.0, 1.5),
            Load::distributed(3.5, 2.0, 5.0),
            Load::moment(-8.0, 6.0),
            Load::point(4.0, 9.0),
        ];
        let specs = [
            BeamSpec::simple(9.0, 0.5, 7.5),
            BeamSpec::cantilever_left(9.0, 0.0),
            BeamSpec::cantilever_right(9.0),
        ];

        for base in specs {
            let spec = loads.iter().fold(base, |spec, load| spec.with_load(*load));
            let residuals = compute_reactions(&spec).residuals(&spec);
            assert_abs_diff_eq!(residuals.force_kn, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(residuals.moment_knm, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_no_loads() {
        for kind in SupportKind::ALL {
            let spec = BeamSpec::simple(6.0, 0.0, 6.0);
            let spec = BeamSpec { support_kind: kind, ..spec };
            assert!(compute_reactions(&spec).is_zero());
        }
    }

    #[test]
    fn test_serialization() {
        let reactions = Reactions::FixedLeft {
            vertical_kn: 10.0,
            moment_knm: 100.0,
        };
        let json = serde_json::to_string(&reactions).unwrap();
        assert!(json.contains("\"type\":\"FixedLeft\""));
        let roundtrip: Reactions = serde_json::from_str(&json).unwrap();
        assert_eq!(reactions, roundtrip);
    }
}
