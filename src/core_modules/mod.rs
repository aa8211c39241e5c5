pub mod conventions;
pub mod erode;
pub mod feature_table;
pub mod geometry;
pub mod label_propagator;
pub mod label_volume;
pub mod projection;
pub mod reader_point;
pub mod utils;
