// Domain layer: models and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod sample_data;
