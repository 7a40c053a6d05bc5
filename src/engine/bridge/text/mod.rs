//! Text measurement abstraction for directional text layout.
//!
//! # Overview
//!
//! This module defines the interface between the directional layout core and
//! platform-specific font metrics implementations.
//!
//! It does **not** decide how the text is oriented or where it is drawn.
//! It only reports the tight pixel extents of a single glyph run for the
//! font the caller describes.
//!
//! # Responsibilities
//!
//! - Accept text content and a font description
//! - Measure the tight ink bounds (width, height, baseline) of one line
//! - Provide a backend-agnostic font metrics abstraction
//!
//! # Non-Responsibilities
//!
//! - Line wrapping or multi-line layout
//! - Orientation, padding or constraint handling
//! - Rendering or draw command generation
//!
//! # Data Flow
//!
//! ```text
//! Text + Font → TextMeasurer → TextMeasurement → BoundingBox → LayoutSolver
//! ```

use std::fmt;

/* ============================
 * Measure Request
 * ============================ */

/// Font used for a measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescription {
    /// Font family (None = measurer default)
    pub family: Option<String>,

    /// Font size in pixels
    pub size_px: f32,
}

impl FontDescription {
    pub fn new(size_px: f32) -> Self {
        Self {
            family: None,
            size_px,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextMeasurementRequest {
    /// UTF-8 text content, a single line
    pub text: String,

    pub font: FontDescription,
}

/* ============================
 * Measure Result
 * ============================ */

#[derive(Debug, Clone, PartialEq)]
pub struct TextMeasurement {
    /// Ink width of the run
    pub width: f32,

    /// Ink height of the run
    pub height: f32,

    /// Baseline position from the top of the ink bounds
    pub baseline: f32,
}

/* ============================
 * Errors
 * ============================ */

#[derive(Debug, Clone, PartialEq)]
pub enum TextMeasureError {
    FontNotFound(String),
    FontLoadError(String),
    InvalidMetrics(String),
    Internal(String),
}

impl fmt::Display for TextMeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontNotFound(s) => write!(f, "Font not found: {s}"),
            Self::FontLoadError(s) => write!(f, "Font load error: {s}"),
            Self::InvalidMetrics(s) => write!(f, "Invalid metrics: {s}"),
            Self::Internal(s) => write!(f, "Internal error: {s}"),
        }
    }
}

impl std::error::Error for TextMeasureError {}

/* ============================
 * Trait
 * ============================ */

/// Font metrics provider.
///
/// Implementations must be deterministic for a given text and font.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, req: &TextMeasurementRequest) -> Result<TextMeasurement, TextMeasureError>;
}

/* ============================
 * Fallback
 * ============================ */

pub mod fallback;
pub use fallback::FallbackTextMeasurer;
