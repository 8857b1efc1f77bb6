use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Student who has paid but still awaits activation
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingActivationDto {
    pub nim: String,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: Option<String>,
    /// Latest `lunas` payment date
    #[serde(rename = "tanggal_bayar")]
    pub paid_on: Option<NaiveDate>,
    #[serde(rename = "nama_dosen")]
    pub advisor_name: String,
}

/// Summary counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummaryDto {
    /// All students
    pub total_mahasiswa: i64,
    /// Payment rows with status `lunas`, not distinct students
    pub total_lunas: i64,
    /// Students with administrative status `active`
    pub total_active: i64,
}
