mod student_dto;

pub use student_dto::*;
