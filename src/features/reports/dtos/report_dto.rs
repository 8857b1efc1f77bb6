use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::payments::models::PaymentStatus;
use crate::features::students::models::AdministrativeStatus;

/// One (student, payment) pair of the report. Payment fields are null for
/// students without payments.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct ReportRowDto {
    #[schema(example = "202401001")]
    pub nim: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "status_administrasi")]
    pub status: AdministrativeStatus,
    #[serde(rename = "tanggal_bayar")]
    pub paid_on: Option<NaiveDate>,
    #[serde(rename = "jumlah")]
    pub amount: Option<i64>,
    #[serde(rename = "status_bayar")]
    pub payment_status: Option<PaymentStatus>,
}
