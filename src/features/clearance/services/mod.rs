mod clearance_service;

pub use clearance_service::ClearanceService;
