use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create the report route
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/laporan", get(handlers::get_report))
        .with_state(report_service)
}
