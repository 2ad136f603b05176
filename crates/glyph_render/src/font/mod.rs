pub mod matcher;
pub mod raster;
