use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Payment status (`pembayaran.status`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    /// Paid in full
    Lunas,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Lunas => write!(f, "lunas"),
        }
    }
}

/// Database model for a payment (`pembayaran`)
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Payment {
    pub id: i64,
    pub nim: String,
    pub paid_on: NaiveDate,
    pub amount: i64,
    pub status: PaymentStatus,
    pub proof: Option<String>,
}
