pub mod clearance;
pub mod dashboard;
pub mod home;
pub mod payments;
pub mod reports;
pub mod students;
