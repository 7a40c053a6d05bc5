pub mod font;
pub mod renderer;

pub(crate) mod os;
