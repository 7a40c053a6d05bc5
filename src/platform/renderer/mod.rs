pub mod raster;
pub mod text_measurer;

pub use raster::RasterRenderer;
pub use text_measurer::PlatformTextMeasurer;
