//! # Beam Calculations
//!
//! The analysis engine. Each computation is a pure function of a
//! [`BeamSpec`]; nothing is cached or shared between calls, so callers can
//! recompute on every edit and from any thread.
//!
//! - [`beam`] - Beam definition and support configurations
//! - [`reactions`] - Static equilibrium (support reactions)
//! - [`diagrams`] - Shear, moment, slope and deflection curves
//! - [`summary`] - Peak values and derived display quantities
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{analyze, BeamSpec};
//! use beam_core::loads::Load;
//! use beam_core::settings::AnalysisSettings;
//!
//! let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::distributed(2.0, 0.0, 10.0));
//! let analysis = analyze(&spec, &AnalysisSettings::default());
//!
//! assert!((analysis.reactions.vertical_a_kn() - 10.0).abs() < 1e-12);
//! assert!((analysis.summary.moment_knm.value - 25.0).abs() < 1e-9);
//! ```

pub mod beam;
pub mod diagrams;
pub mod reactions;
pub mod summary;

use log::debug;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use beam::{BeamSpec, SupportKind};
pub use diagrams::{compute_diagrams, compute_diagrams_with, diagrams_from_reactions, ResultSequence, Sample};
pub use reactions::{compute_reactions, compute_reactions_with, Reactions, Residuals};
pub use summary::{summarize, DiagramSummary, Peak};

use crate::settings::AnalysisSettings;

/// Everything a front end renders for one beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    /// Support reactions
    pub reactions: Reactions,
    /// Sampled response curves
    pub diagrams: ResultSequence,
    /// Peak values of the curves
    pub summary: DiagramSummary,
}

/// Solve reactions, build the diagrams and summarize them in one call
pub fn analyze(spec: &BeamSpec, settings: &AnalysisSettings) -> BeamAnalysis {
    let reactions = compute_reactions_with(spec, settings);
    let diagrams = diagrams_from_reactions(spec, reactions, settings);
    let summary = summarize(&diagrams);

    let residuals = reactions.residuals(spec);
    debug!(
        "analyzed {} m {} beam with {} loads: residual force {:e} kN, moment {:e} kN·m",
        spec.length_m,
        spec.support_kind,
        spec.loads.len(),
        residuals.force_kn,
        residuals.moment_knm
    );

    BeamAnalysis {
        reactions,
        diagrams,
        summary,
    }
}
