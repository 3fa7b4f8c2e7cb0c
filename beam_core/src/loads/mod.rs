//! Beam Loads
//!
//! The closed set of transverse actions a beam can carry, and the two
//! questions each pass of the analysis asks of a load:
//!
//! - its moment about a pivot (reaction solve)
//! - its effect on a left-hand free body cut at `x` (internal forces)
//!
//! ## Sign Convention
//! - Point and distributed magnitudes are positive downward
//! - Applied moments are positive counter-clockwise
//!
//! ## Example
//! ```rust
//! use beam_core::loads::Load;
//!
//! let loads = vec![
//!     Load::point(10.0, 5.0),              // 10 kN at 5 m
//!     Load::distributed(2.0, 0.0, 10.0),   // 2 kN/m from 0 to 10 m
//!     Load::moment(4.0, 7.5),              // 4 kN·m CCW at 7.5 m
//! ];
//!
//! let total: f64 = loads.iter().map(Load::resultant_kn).sum();
//! assert!((total - 30.0).abs() < 1e-12);
//! ```

use crate::units::{KiloNewtons, KnMeters, KnPerMeter, Meters};

/// A single load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Load {
    /// Concentrated force (kN, downward positive) at a position (m from x = 0)
    Point { magnitude_kn: f64, position_m: f64 },

    /// Uniform load (kN/m, downward positive) over `[position_m, position_m + span_m]`
    Distributed {
        intensity_kn_per_m: f64,
        position_m: f64,
        span_m: f64,
    },

    /// Pure couple (kN·m, counter-clockwise positive) at a position
    Moment { magnitude_knm: f64, position_m: f64 },
}

impl Load {
    /// Create a point load
    pub fn point(magnitude_kn: f64, position_m: f64) -> Self {
        Load::Point {
            magnitude_kn,
            position_m,
        }
    }

    /// Create a uniform load starting at `position_m` and running `span_m`
    pub fn distributed(intensity_kn_per_m: f64, position_m: f64, span_m: f64) -> Self {
        Load::Distributed {
            intensity_kn_per_m,
            position_m,
            span_m,
        }
    }

    /// Create an applied moment
    pub fn moment(magnitude_knm: f64, position_m: f64) -> Self {
        Load::Moment {
            magnitude_knm,
            position_m,
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::Distributed { .. } => "Distributed",
            Load::Moment { .. } => "Moment",
        }
    }

    /// Position where the load starts (m)
    pub fn position_m(&self) -> f64 {
        match *self {
            Load::Point { position_m, .. }
            | Load::Distributed { position_m, .. }
            | Load::Moment { position_m, .. } => position_m,
        }
    }

    /// Position where the load ends (m); equal to the start for concentrated actions
    pub fn end_m(&self) -> f64 {
        match *self {
            Load::Distributed {
                position_m, span_m, ..
            } => position_m + span_m,
            _ => self.position_m(),
        }
    }

    /// Total downward force (kN). Couples carry no net force.
    pub fn resultant_kn(&self) -> f64 {
        match *self {
            Load::Point { magnitude_kn, .. } => magnitude_kn,
            Load::Distributed {
                intensity_kn_per_m,
                span_m,
                ..
            } => KnPerMeter(intensity_kn_per_m).over(Meters(span_m)).value(),
            Load::Moment { .. } => 0.0,
        }
    }

    /// Line of action of the resultant (m): the centroid for distributed loads
    pub fn resultant_position_m(&self) -> f64 {
        match *self {
            Load::Distributed {
                position_m, span_m, ..
            } => position_m + span_m / 2.0,
            _ => self.position_m(),
        }
    }

    /// Counter-clockwise moment of this load about `pivot_m` (kN·m).
    ///
    /// A downward force to the right of the pivot turns clockwise, so it
    /// contributes `-F × (x - pivot)`; a couple contributes its magnitude
    /// wherever it sits.
    pub fn moment_about_knm(&self, pivot_m: f64) -> f64 {
        match *self {
            Load::Point { .. } | Load::Distributed { .. } => {
                let arm = Meters(self.resultant_position_m() - pivot_m);
                -KiloNewtons(self.resultant_kn()).at_arm(arm).value()
            }
            Load::Moment { magnitude_knm, .. } => magnitude_knm,
        }
    }

    /// Contribution to (shear kN, moment kN·m) at a section cut at `x_m`.
    ///
    /// Only the part of the load strictly left of the cut counts. A
    /// concentrated action sitting exactly on the cut has not been passed
    /// yet, so its jump shows from the next sample on.
    pub fn section_effect(&self, x_m: f64) -> (f64, f64) {
        match *self {
            Load::Point {
                magnitude_kn,
                position_m,
            } => {
                if position_m < x_m {
                    let moment = KiloNewtons(magnitude_kn).at_arm(Meters(x_m - position_m));
                    (-magnitude_kn, -moment.value())
                } else {
                    (0.0, 0.0)
                }
            }
            Load::Distributed {
                intensity_kn_per_m,
                position_m,
                span_m,
            } => {
                let overlap = x_m.min(position_m + span_m) - position_m;
                if overlap > 0.0 {
                    // Treat the loaded part left of the cut as a point load at its centroid
                    let force = KnPerMeter(intensity_kn_per_m).over(Meters(overlap));
                    let centroid = position_m + overlap / 2.0;
                    let moment = force.at_arm(Meters(x_m - centroid));
                    (-force.value(), -moment.value())
                } else {
                    (0.0, 0.0)
                }
            }
            Load::Moment {
                magnitude_knm,
                position_m,
            } => {
                // A CCW couple on the left free body is balanced by a hogging section moment
                if position_m < x_m {
                    (0.0, -KnMeters(magnitude_knm).value())
                } else {
                    (0.0, 0.0)
                }
            }
        }
    }

    /// Distributed intensity (kN/m) acting at `x_m`; zero for concentrated actions
    pub fn intensity_at(&self, x_m: f64) -> f64 {
        match *self {
            Load::Distributed {
                intensity_kn_per_m,
                position_m,
                span_m,
            } if x_m >= position_m && x_m < position_m + span_m => intensity_kn_per_m,
            _ => 0.0,
        }
    }

    /// True when every number describing the load is finite
    pub fn is_finite(&self) -> bool {
        match *self {
            Load::Point {
                magnitude_kn,
                position_m,
            } => magnitude_kn.is_finite() && position_m.is_finite(),
            Load::Distributed {
                intensity_kn_per_m,
                position_m,
                span_m,
            } => intensity_kn_per_m.is_finite() && position_m.is_finite() && span_m.is_finite(),
            Load::Moment {
                magnitude_knm,
                position_m,
            } => magnitude_knm.is_finite() && position_m.is_finite(),
        }
    }
}

impl std::fmt::Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Load::Point {
                magnitude_kn,
                position_m,
            } => write!(f, "P = {:.2} kN @ {:.2} m", magnitude_kn, position_m),
            Load::Distributed {
                intensity_kn_per_m,
                position_m,
                span_m,
            } => write!(
                f,
                "w = {:.2} kN/m @ {:.2}..{:.2} m",
                intensity_kn_per_m,
                position_m,
                position_m + span_m
            ),
            Load::Moment {
                magnitude_knm,
                position_m,
            } => write!(f, "M = {:.2} kN·m @ {:.2} m", magnitude_knm, position_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resultants() {
        assert_relative_eq!(Load::point(10.0, 3.0).resultant_kn(), 10.0);
        assert_relative_eq!(Load::distributed(2.0, 2.0, 6.0).resultant_kn(), 12.0);
        assert_eq!(Load::moment(5.0, 1.0).resultant_kn(), 0.0);

        assert_relative_eq!(Load::distributed(2.0, 2.0, 6.0).resultant_position_m(), 5.0);
        assert_relative_eq!(Load::distributed(2.0, 2.0, 6.0).end_m(), 8.0);
    }

    #[test]
    fn test_moment_about_pivot() {
        // Downward load right of the pivot turns clockwise
        assert_relative_eq!(Load::point(10.0, 5.0).moment_about_knm(0.0), -50.0);
        // Downward load left of the pivot turns counter-clockwise
        assert_relative_eq!(Load::point(10.0, 5.0).moment_about_knm(10.0), 50.0);
        // Distributed load acts at its centroid
        assert_relative_eq!(Load::distributed(2.0, 0.0, 10.0).moment_about_knm(0.0), -100.0);
        // Couples are free vectors
        assert_relative_eq!(Load::moment(7.0, 3.0).moment_about_knm(0.0), 7.0);
        assert_relative_eq!(Load::moment(7.0, 3.0).moment_about_knm(9.0), 7.0);
    }

    #[test]
    fn test_point_section_effect() {
        let load = Load::point(10.0, 5.0);
        // Not yet passed at and before its position
        assert_eq!(load.section_effect(4.0), (0.0, 0.0));
        assert_eq!(load.section_effect(5.0), (0.0, 0.0));

        let (v, m) = load.section_effect(7.0);
        assert_relative_eq!(v, -10.0);
        assert_relative_eq!(m, -20.0);
    }

    #[test]
    fn test_distributed_section_effect() {
        let load = Load::distributed(2.0, 2.0, 4.0);
        assert_eq!(load.section_effect(2.0), (0.0, 0.0));

        // Partially covered: 2 m loaded, resultant 4 kN at 3 m
        let (v, m) = load.section_effect(4.0);
        assert_relative_eq!(v, -4.0);
        assert_relative_eq!(m, -4.0);

        // Fully passed: 8 kN at 4 m
        let (v, m) = load.section_effect(10.0);
        assert_relative_eq!(v, -8.0);
        assert_relative_eq!(m, -48.0);
    }

    #[test]
    fn test_moment_section_effect() {
        let load = Load::moment(6.0, 3.0);
        assert_eq!(load.section_effect(3.0), (0.0, 0.0));
        assert_eq!(load.section_effect(3.5), (0.0, -6.0));
    }

    #[test]
    fn test_intensity_at() {
        let load = Load::distributed(3.0, 1.0, 2.0);
        assert_eq!(load.intensity_at(0.5), 0.0);
        assert_eq!(load.intensity_at(1.0), 3.0);
        assert_eq!(load.intensity_at(2.5), 3.0);
        assert_eq!(load.intensity_at(3.0), 0.0);
        assert_eq!(Load::point(3.0, 1.0).intensity_at(1.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Load::point(10.0, 5.0).to_string(), "P = 10.00 kN @ 5.00 m");
        assert_eq!(Load::moment(1.5, 2.0).display_name(), "Moment");
        assert!(!Load::point(f64::NAN, 1.0).is_finite());
    }
}
