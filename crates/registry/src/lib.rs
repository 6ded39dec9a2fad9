//! Trait value registry and label annotation.
//!
//! The host hands over its trait definitions; this crate indexes them,
//! repairs missing score data, colors each degree label by its score, and
//! applies or reverts user overrides. All state lives in a
//! [`TraitValueContext`] the host keeps between lifecycle hooks.
//!
//! # Lifecycle
//!
//! ```text
//! load ─► rebuild registry ─► capture snapshot ─► check consistency ─► apply overrides ─► color
//! settings changed ─► uncolor ─► apply overrides ─► color
//! reset ─► uncolor ─► restore snapshot ─► color
//! ```

/// Consistency pass reconciling degrees with score values.
pub mod consistency;
/// Lifecycle context owning registry, snapshot and extremes.
pub mod context;
/// Trait, degree and score extension definitions.
pub mod def;
/// Diagnostics emitted by the passes.
pub mod diagnostic;
/// Score to color mapping.
pub mod engine;
/// Running best/worst scores.
pub mod extremes;
/// Idempotent label coloring and its inverse.
pub mod label;
/// Override and reset application.
pub mod overrides;
/// Flattened trait and degree lookup.
pub mod registry;
/// Original scores captured at load.
pub mod snapshot;

pub use consistency::{ConsistencyReport, check_consistency};
pub use context::{LoadReport, TraitValueContext};
pub use def::{Annotation, DegreeData, DegreeValue, PackageInfo, ScoreExtension, TraitDef};
pub use diagnostic::Diagnostic;
pub use engine::{Band, Gradient, gradient, value_color, value_tag};
pub use extremes::RunningExtremes;
pub use label::{capitalize_first, color_labels, uncolor_labels};
pub use overrides::{OverrideReport, OverrideSource, apply_overrides};
pub use registry::{DegreeRef, Registry};
pub use snapshot::Snapshot;
pub use traitval_config::{ColorBands, OverrideMap, TraitValueSettings};
pub use traitval_primitives::{DegreeKey, KeyError, Rgb};
