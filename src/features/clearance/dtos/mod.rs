mod clearance_dto;

pub use clearance_dto::*;
