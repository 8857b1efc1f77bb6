use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Administrative status of a student (`status_administrasi`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AdministrativeStatus {
    Pending,
    Active,
}

impl std::fmt::Display for AdministrativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdministrativeStatus::Pending => write!(f, "pending"),
            AdministrativeStatus::Active => write!(f, "active"),
        }
    }
}

/// Database model for a student (`mahasiswa`)
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Student {
    pub id: i64,
    pub nim: String,
    pub name: String,
    pub email: Option<String>,
    pub advisor_id: Option<i64>,
    pub status: AdministrativeStatus,
}
