pub mod types;

pub use types::{Color, TextStyle};
