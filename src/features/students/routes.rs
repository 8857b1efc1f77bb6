use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::students::handlers;
use crate::features::students::services::StudentService;

/// Create routes for the student pages
pub fn routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/mahasiswa", get(handlers::status_page))
        .with_state(service)
}
