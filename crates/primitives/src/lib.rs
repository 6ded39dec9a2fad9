//! Leaf value types for trait value annotation: RGB colors and degree keys.

/// RGB colors, linear blending, and rich-text color tags.
pub mod color;
/// Composite `(trait id, degree)` keys and their string encoding.
pub mod key;

pub use color::{COLOR_TAG_CLOSE, COLOR_TAG_LEN, COLOR_TAG_MARKER, Rgb};
pub use key::{DegreeKey, KeyError};
