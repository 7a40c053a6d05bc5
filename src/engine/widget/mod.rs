pub mod attributes;
pub mod directional_text;

pub use attributes::{Attribute, DirectionalTextConfig};
pub use directional_text::DirectionalTextView;
