use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reports::dtos::ReportRowDto;
use crate::features::reports::services::ReportService;

/// Full payment report
///
/// One entry per (student, payment) pair, ordered by NIM. Students without
/// payments appear once with null payment fields.
#[utoipa::path(
    get,
    path = "/api/laporan",
    responses(
        (status = 200, description = "Report rows", body = Vec<ReportRowDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportRowDto>>> {
    let rows = service.full_report().await?;
    Ok(Json(rows))
}
