use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::clearance::dtos::ActivationResponseDto;
use crate::features::clearance::services::ClearanceService;
use crate::modules::storage::LetterStore;
use crate::shared::types::ApiResponse;
use crate::shared::validation::validate_nim;

/// Activate a student's administration
///
/// Sets the administrative status to `active` and generates the clearance
/// letter in the same request.
#[utoipa::path(
    post,
    path = "/api/aktivasi/{nim}",
    params(
        ("nim" = String, Path, description = "Student enrollment number")
    ),
    responses(
        (status = 200, description = "Student activated: {status, message, surat_url}", body = ActivationResponseDto),
        (status = 400, description = "Invalid NIM, or no paid SPP when the payment guard is enabled"),
        (status = 404, description = "NIM not found")
    ),
    tag = "clearance"
)]
pub async fn activate_student(
    State(service): State<Arc<ClearanceService>>,
    Path(nim): Path<String>,
) -> Result<Json<ApiResponse<ActivationResponseDto>>> {
    validate_nim(&nim)?;

    let data = service.activate(&nim).await?;

    Ok(Json(ApiResponse::success(
        format!("Mahasiswa {} berhasil diaktivasi!", nim),
        data,
    )))
}

/// Download a student's clearance letter
#[utoipa::path(
    get,
    path = "/download-surat/{nim}",
    params(
        ("nim" = String, Path, description = "Student enrollment number")
    ),
    responses(
        (status = 200, description = "Letter as a text attachment", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid NIM"),
        (status = 404, description = "Letter has not been generated")
    ),
    tag = "clearance"
)]
pub async fn download_letter(
    State(service): State<Arc<ClearanceService>>,
    Path(nim): Path<String>,
) -> Result<impl IntoResponse> {
    validate_nim(&nim)?;

    let bytes = service.download_letter(&nim).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", LetterStore::file_name(&nim)),
        ),
    ];

    Ok((headers, bytes))
}
