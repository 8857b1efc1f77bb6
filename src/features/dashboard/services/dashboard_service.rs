use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{DashboardSummaryDto, PendingActivationDto};

/// Service for the faculty dashboard queries
pub struct DashboardService {
    pool: SqlitePool,
}

impl DashboardService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Students with a `lunas` payment whose administration is still pending.
    ///
    /// Each student appears once, with their latest `lunas` payment date.
    /// Students without an advisor are not listed.
    pub async fn pending_activations(&self) -> Result<Vec<PendingActivationDto>> {
        sqlx::query_as::<_, PendingActivationDto>(
            r#"
            SELECT
                m.nim,
                m.nama AS name,
                m.email,
                MAX(p.tanggal_bayar) AS paid_on,
                d.nama AS advisor_name
            FROM mahasiswa m
            JOIN pembayaran p ON m.nim = p.nim
            JOIN dosen d ON m.id_dosen = d.id
            WHERE p.status = 'lunas' AND m.status_administrasi = 'pending'
            GROUP BY m.nim, m.nama, m.email, d.nama
            ORDER BY m.nim
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch pending activations: {:?}", e);
            AppError::Database(e)
        })
    }

    /// The three dashboard counters
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let total_mahasiswa = self.count("SELECT COUNT(*) FROM mahasiswa").await?;
        let total_lunas = self
            .count("SELECT COUNT(*) FROM pembayaran WHERE status = 'lunas'")
            .await?;
        let total_active = self
            .count("SELECT COUNT(*) FROM mahasiswa WHERE status_administrasi = 'active'")
            .await?;

        Ok(DashboardSummaryDto {
            total_mahasiswa,
            total_lunas,
            total_active,
        })
    }

    async fn count(&self, sql: &'static str) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run count query '{}': {:?}", sql, e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        insert_advisor, insert_payment, insert_student, set_student_status, setup_test_pool,
    };
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_summary_on_empty_store() {
        let pool = setup_test_pool().await;
        let service = DashboardService::new(pool);

        assert_eq!(
            service.get_summary().await.unwrap(),
            DashboardSummaryDto::default()
        );
    }

    #[tokio::test]
    async fn test_summary_counts_payment_rows_not_students() {
        let pool = setup_test_pool().await;
        insert_student(&pool, "1", "A", None).await;
        insert_student(&pool, "2", "B", None).await;
        insert_student(&pool, "3", "C", None).await;
        insert_payment(&pool, "1", "2024-01-01", 100, "lunas").await;
        insert_payment(&pool, "1", "2024-02-01", 100, "lunas").await;
        insert_payment(&pool, "2", "2024-02-01", 100, "pending").await;
        set_student_status(&pool, "3", "active").await;
        let service = DashboardService::new(pool);

        let summary = service.get_summary().await.unwrap();
        assert_eq!(summary.total_mahasiswa, 3);
        assert_eq!(summary.total_lunas, 2);
        assert_eq!(summary.total_active, 1);
    }

    #[tokio::test]
    async fn test_pending_activations_queue() {
        let pool = setup_test_pool().await;
        let advisor = insert_advisor(&pool, "DOS001", "Dr. Ahmad").await;

        // paid twice, pending: listed once with the latest date
        insert_student(&pool, "1", "Paid Twice", Some(advisor)).await;
        insert_payment(&pool, "1", "2024-01-01", 100, "lunas").await;
        insert_payment(&pool, "1", "2024-03-01", 100, "lunas").await;
        // not paid
        insert_student(&pool, "2", "Unpaid", Some(advisor)).await;
        // only a pending payment
        insert_student(&pool, "3", "Pending Payment", Some(advisor)).await;
        insert_payment(&pool, "3", "2024-01-01", 100, "pending").await;
        // paid but already active
        insert_student(&pool, "4", "Active", Some(advisor)).await;
        insert_payment(&pool, "4", "2024-01-01", 100, "lunas").await;
        set_student_status(&pool, "4", "active").await;
        // paid, no advisor
        insert_student(&pool, "5", "No Advisor", None).await;
        insert_payment(&pool, "5", "2024-01-01", 100, "lunas").await;

        let service = DashboardService::new(pool);
        let queue = service.pending_activations().await.unwrap();

        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].nim, "1");
        assert_eq!(queue[0].advisor_name, "Dr. Ahmad");
        assert_eq!(queue[0].paid_on, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
