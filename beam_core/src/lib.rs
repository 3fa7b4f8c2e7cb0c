//! # beam_core - Beam Response Engine
//!
//! `beam_core` computes the internal response of a straight beam under
//! static load: support reactions, shear and bending-moment diagrams, and the
//! slope and deflection curves found by integrating the moment twice against
//! the beam's flexural stiffness.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a beam and return results
//! - **Never interrupts a redraw**: degenerate input yields a defined,
//!   finite result instead of an error
//! - **JSON-ready results**: Reactions, samples and summaries serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{compute_diagrams, compute_reactions, BeamSpec};
//! use beam_core::loads::Load;
//!
//! let spec = BeamSpec::simple(10.0, 0.0, 10.0).with_load(Load::point(10.0, 5.0));
//!
//! let reactions = compute_reactions(&spec);
//! assert!((reactions.vertical_a_kn() - 5.0).abs() < 1e-12);
//!
//! let diagrams = compute_diagrams(&spec, 200);
//! assert_eq!(diagrams.len(), 201);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Reaction solver, diagram integrator, summaries
//! - [`loads`] - Point, distributed and moment loads
//! - [`settings`] - Resolution and tolerance settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, compute_diagrams, compute_reactions, BeamAnalysis, BeamSpec, Reactions, ResultSequence, Sample,
    SupportKind,
};
pub use errors::{CalcError, CalcResult};
pub use loads::Load;
pub use settings::AnalysisSettings;
