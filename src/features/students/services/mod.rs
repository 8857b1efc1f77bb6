mod student_service;

pub use student_service::StudentService;
