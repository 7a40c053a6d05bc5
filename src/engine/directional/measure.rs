use crate::engine::bridge::text::{
    FontDescription, TextMeasureError, TextMeasurementRequest, TextMeasurer,
};

use super::error::Result;

/// Tight pixel extents of a glyph run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const ZERO: BoundingBox = BoundingBox {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Measures the bounding box of `text` drawn with `font`.
///
/// Empty text yields a zero box without consulting the measurer.
pub fn measure(
    text: &str,
    font: &FontDescription,
    measurer: &dyn TextMeasurer,
) -> Result<BoundingBox> {
    if text.is_empty() {
        return Ok(BoundingBox::ZERO);
    }

    let req = TextMeasurementRequest {
        text: text.to_string(),
        font: font.clone(),
    };
    let meas = measurer.measure(&req)?;

    if !valid_extent(meas.width) || !valid_extent(meas.height) {
        return Err(TextMeasureError::InvalidMetrics(format!(
            "measurer returned {}x{} for {:?}",
            meas.width, meas.height, text
        ))
        .into());
    }

    log::debug!(target: "Measurer", "{:?} @ {}px -> {}x{}", text, font.size_px, meas.width, meas.height);

    Ok(BoundingBox::new(meas.width, meas.height))
}

fn valid_extent(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}
