pub mod params;
pub mod pipeline;
