pub mod engine;
pub mod platform;

pub use engine::directional;
pub use engine::widget::{DirectionalTextConfig, DirectionalTextView};
