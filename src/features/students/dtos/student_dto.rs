use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::features::payments::models::PaymentStatus;
use crate::features::students::models::AdministrativeStatus;

/// Query parameters of the status lookup page
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct StatusQuery {
    /// Student enrollment number; empty or missing renders the blank form
    #[serde(default)]
    pub nim: Option<String>,
}

impl StatusQuery {
    /// Trimmed NIM, `None` when blank
    pub fn nim(&self) -> Option<&str> {
        self.nim.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Student joined with a payment row; payment fields are null when the
/// student has not paid yet
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct StudentStatusDto {
    pub nim: String,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "status_administrasi")]
    pub status: AdministrativeStatus,
    #[serde(rename = "tanggal_bayar")]
    pub paid_on: Option<NaiveDate>,
    #[serde(rename = "jumlah")]
    pub amount: Option<i64>,
    #[serde(rename = "status_bayar")]
    pub payment_status: Option<PaymentStatus>,
}
