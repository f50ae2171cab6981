// Domain layer: the record model and the field store port that the normalizers write through.

pub mod model;
pub mod ports;
