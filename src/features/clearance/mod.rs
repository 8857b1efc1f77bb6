//! Administrative clearance: activation by faculty and the generated
//! clearance letter (Surat Bebas SPP).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/aktivasi/{nim}` | Activate a student and generate their letter |
//! | GET | `/download-surat/{nim}` | Download the generated letter |

pub mod dtos;
pub mod handlers;
pub mod letter;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ClearanceService;
