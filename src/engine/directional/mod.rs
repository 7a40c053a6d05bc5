//! Orientation-aware sizing and baseline construction for a single line of text.
//!
//! ```text
//! text ─▶ measure ─▶ BoundingBox ─▶ layout::solve ─▶ ResolvedSize
//!                          │                              │
//!                          └──────────▶ path::build_path ◀┘ ─▶ PathSegment
//! ```
//!
//! Every function here is pure; callers recompute on each measure/draw pass.

pub mod error;
pub mod layout;
pub mod measure;
pub mod orientation;
pub mod path;

pub use error::DirectionalTextError;
pub use layout::{AxisConstraint, Padding, ResolvedSize, content_size, resolve_axis, solve};
pub use measure::{BoundingBox, measure};
pub use orientation::Orientation;
pub use path::{PathSegment, Point, build_path};
