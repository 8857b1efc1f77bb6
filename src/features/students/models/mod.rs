mod student;

pub use student::{AdministrativeStatus, Student};
