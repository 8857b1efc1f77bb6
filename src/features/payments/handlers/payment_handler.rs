use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::payments::dtos::PayTuitionRequestDto;
use crate::features::payments::services::PaymentService;
use crate::shared::templates::format_thousands;
use crate::shared::types::{ApiResponse, MessageResponseDto};

/// Simulate an SPP payment
///
/// Records a payment with status `lunas` dated today. The student's
/// administrative status is not changed; activation is a separate step.
#[utoipa::path(
    post,
    path = "/api/bayar-spp",
    request_body = PayTuitionRequestDto,
    responses(
        (status = 200, description = "Payment recorded: {status, message}", body = MessageResponseDto),
        (status = 400, description = "Missing or invalid NIM or amount"),
        (status = 404, description = "NIM not found")
    ),
    tag = "payments"
)]
pub async fn pay_tuition(
    State(service): State<Arc<PaymentService>>,
    AppJson(dto): AppJson<PayTuitionRequestDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let nim = dto
        .nim
        .as_deref()
        .ok_or_else(|| AppError::Validation("NIM wajib diisi".to_string()))?;

    let payment = service.simulate_payment(nim, dto.jumlah).await?;

    Ok(Json(ApiResponse::message(format!(
        "Pembayaran SPP sebesar Rp {} berhasil!",
        format_thousands(payment.amount)
    ))))
}
