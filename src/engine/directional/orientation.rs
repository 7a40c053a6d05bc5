use std::fmt;
use std::str::FromStr;

use super::error::DirectionalTextError;

/// Direction in which the glyph run flows across the surface.
///
/// The numeric codes are the values accepted by the `direction` attribute:
///
/// | code | variant       |
/// |------|---------------|
/// | 0    | `TopToBottom` |
/// | 1    | `BottomToTop` |
/// | 2    | `LeftToRight` |
/// | 3    | `RightToLeft` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::TopToBottom,
        Orientation::BottomToTop,
        Orientation::LeftToRight,
        Orientation::RightToLeft,
    ];

    pub fn code(self) -> i32 {
        match self {
            Orientation::TopToBottom => 0,
            Orientation::BottomToTop => 1,
            Orientation::LeftToRight => 2,
            Orientation::RightToLeft => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::LeftToRight | Orientation::RightToLeft)
    }

    /// Vertical runs are rotated by 90 degrees, so the surface axes swap roles.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

impl TryFrom<i32> for Orientation {
    type Error = DirectionalTextError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Orientation::TopToBottom),
            1 => Ok(Orientation::BottomToTop),
            2 => Ok(Orientation::LeftToRight),
            3 => Ok(Orientation::RightToLeft),
            other => Err(DirectionalTextError::InvalidOrientation(other.to_string())),
        }
    }
}

impl FromStr for Orientation {
    type Err = DirectionalTextError;

    /// Accepts either the numeric code or a name such as `left-to-right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Orientation::try_from(code);
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "toptobottom" | "uptodown" => Ok(Orientation::TopToBottom),
            "bottomtotop" | "downtoup" => Ok(Orientation::BottomToTop),
            "lefttoright" => Ok(Orientation::LeftToRight),
            "righttoleft" => Ok(Orientation::RightToLeft),
            _ => Err(DirectionalTextError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::TopToBottom => "top-to-bottom",
            Orientation::BottomToTop => "bottom-to-top",
            Orientation::LeftToRight => "left-to-right",
            Orientation::RightToLeft => "right-to-left",
        };
        write!(f, "{name}")
    }
}
