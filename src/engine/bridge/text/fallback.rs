use super::{TextMeasureError, TextMeasurementRequest, TextMeasurer, TextMeasurement};

/// Fallback text measurer.
///
/// This implementation does not rely on any font engine.
/// Every character advances by `size * char_width_ratio` and the ink height is
/// `size * cap_height_ratio`. Intended for testing, bring-up, and environments
/// without font support.
#[derive(Debug, Clone, Copy)]
pub struct FallbackTextMeasurer {
    pub char_width_ratio: f32,
    pub cap_height_ratio: f32,
}

impl Default for FallbackTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            cap_height_ratio: 0.7,
        }
    }
}

impl TextMeasurer for FallbackTextMeasurer {
    fn measure(&self, req: &TextMeasurementRequest) -> Result<TextMeasurement, TextMeasureError> {
        if !req.font.size_px.is_finite() || req.font.size_px <= 0.0 {
            return Err(TextMeasureError::InvalidMetrics(format!(
                "font size {}",
                req.font.size_px
            )));
        }

        let chars = req.text.chars().filter(|c| !c.is_control()).count();
        if chars == 0 {
            return Ok(TextMeasurement {
                width: 0.0,
                height: 0.0,
                baseline: 0.0,
            });
        }

        let height = req.font.size_px * self.cap_height_ratio;
        Ok(TextMeasurement {
            width: chars as f32 * req.font.size_px * self.char_width_ratio,
            height,
            baseline: height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::bridge::text::FontDescription;

    #[test]
    fn fallback_measure_simple() {
        let measurer = FallbackTextMeasurer::default();
        let req = TextMeasurementRequest {
            text: "abc".to_string(),
            font: FontDescription::new(10.0),
        };

        let res = measurer.measure(&req).expect("measurement should succeed");
        assert!((res.width - 18.0).abs() < 1e-5, "width mismatch");
        assert!((res.height - 7.0).abs() < 1e-5, "height mismatch");
        assert!((res.baseline - res.height).abs() < 1e-6);
    }

    #[test]
    fn fallback_rejects_zero_size_font() {
        let measurer = FallbackTextMeasurer::default();
        let req = TextMeasurementRequest {
            text: "abc".to_string(),
            font: FontDescription::new(0.0),
        };

        assert!(matches!(
            measurer.measure(&req),
            Err(TextMeasureError::InvalidMetrics(_))
        ));
    }
}
