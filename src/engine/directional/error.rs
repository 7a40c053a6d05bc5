use std::fmt;

use crate::engine::bridge::text::TextMeasureError;

#[derive(Debug, Clone, PartialEq)]
pub enum DirectionalTextError {
    /// Font metrics could not be computed; nothing should be drawn.
    MetricsUnavailable(TextMeasureError),
    /// Orientation value outside the four known directions.
    InvalidOrientation(String),
    /// Declarative attribute with a value that cannot be parsed.
    InvalidAttribute { name: String, value: String },
}

impl fmt::Display for DirectionalTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetricsUnavailable(e) => write!(f, "text metrics unavailable: {e}"),
            Self::InvalidOrientation(v) => write!(f, "invalid orientation: {v}"),
            Self::InvalidAttribute { name, value } => {
                write!(f, "invalid value for attribute `{name}`: {value}")
            }
        }
    }
}

impl std::error::Error for DirectionalTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MetricsUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TextMeasureError> for DirectionalTextError {
    fn from(e: TextMeasureError) -> Self {
        Self::MetricsUnavailable(e)
    }
}

pub type Result<T> = std::result::Result<T, DirectionalTextError>;
