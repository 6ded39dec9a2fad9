//! Configuration for trait value annotation.
//!
//! Holds the four colors the gradient is built from and the user's persisted
//! score overrides. Settings are stored as TOML:
//!
//! ```toml
//! [colors]
//! neutral = "#FFFFFF"
//! good = "#4CD964"
//! best = "#2FA8FF"
//! bad = "#FF4040"
//!
//! [changed_values]
//! "Kind,2" = 25
//! ```

/// Color band configuration and color parsing.
pub mod color;
/// Error types for configuration parsing.
pub mod error;
/// Persisted settings document.
pub mod settings;

pub use color::{ColorBands, parse_color};
pub use error::{ConfigError, Result};
pub use settings::{OverrideMap, TraitValueSettings};
