pub mod bridge;
pub mod directional;
pub mod layouter;
pub mod renderer_model;
pub mod widget;
