use crate::engine::directional::{DirectionalTextError, Orientation, Padding};
use crate::engine::layouter::types::{Color, TextStyle};

/// Represents a single declarative attribute (`name="value"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Plain configuration for a `DirectionalTextView`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectionalTextConfig {
    pub text: String,
    pub orientation: Orientation,
    pub padding: Padding,
    pub style: TextStyle,
}

impl DirectionalTextConfig {
    /// Builds a config from declarative attributes.
    ///
    /// Recognized names: `direction`, `text`, `textSize`, `textColor`, `fontFamily`,
    /// `padding`, `paddingLeft`, `paddingTop`, `paddingRight`, `paddingBottom`.
    /// Side paddings override `padding` regardless of order. Unknown names are ignored.
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self, DirectionalTextError> {
        let mut config = Self::default();
        let mut sides: [Option<f32>; 4] = [None; 4];

        for attr in attrs {
            match attr.name.as_str() {
                "direction" => config.orientation = attr.value.parse()?,
                "text" => config.text = attr.value.clone(),
                "textSize" => config.style.font_size = parse_dimension(attr)?,
                "textColor" => {
                    config.style.color = Color::from_hex(&attr.value).ok_or_else(|| invalid(attr))?
                }
                "fontFamily" => config.style.font_family = Some(attr.value.clone()),
                "padding" => config.padding = Padding::uniform(parse_dimension(attr)?),
                "paddingLeft" => sides[0] = Some(parse_dimension(attr)?),
                "paddingTop" => sides[1] = Some(parse_dimension(attr)?),
                "paddingRight" => sides[2] = Some(parse_dimension(attr)?),
                "paddingBottom" => sides[3] = Some(parse_dimension(attr)?),
                other => {
                    log::debug!(target: "DirectionalTextConfig", "ignoring attribute `{other}`")
                }
            }
        }

        let [left, top, right, bottom] = sides;
        config.padding = Padding {
            left: left.unwrap_or(config.padding.left),
            top: top.unwrap_or(config.padding.top),
            right: right.unwrap_or(config.padding.right),
            bottom: bottom.unwrap_or(config.padding.bottom),
        };

        Ok(config)
    }
}

/// `12`, `12.5`, `12px` and `12dp` are accepted; negative values are rejected.
fn parse_dimension(attr: &Attribute) -> Result<f32, DirectionalTextError> {
    let raw = attr.value.trim();
    let number = raw
        .strip_suffix("px")
        .or_else(|| raw.strip_suffix("dp"))
        .unwrap_or(raw)
        .trim();

    match number.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(invalid(attr)),
    }
}

fn invalid(attr: &Attribute) -> DirectionalTextError {
    DirectionalTextError::InvalidAttribute {
        name: attr.name.clone(),
        value: attr.value.clone(),
    }
}
