//! Students (mahasiswa): lookup, payment status and administrative status.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/mahasiswa?nim=ID` | Status lookup page |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::StudentService;
