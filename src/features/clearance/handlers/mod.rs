mod clearance_handler;

pub use clearance_handler::*;
