use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::ReportRowDto;

/// Service for the payment report
pub struct ReportService {
    pool: SqlitePool,
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All students left-joined with their payments, ordered by NIM
    pub async fn full_report(&self) -> Result<Vec<ReportRowDto>> {
        let rows = sqlx::query_as::<_, ReportRowDto>(
            r#"
            SELECT
                m.nim,
                m.nama AS name,
                m.status_administrasi AS status,
                p.tanggal_bayar AS paid_on,
                p.jumlah AS amount,
                p.status AS payment_status
            FROM mahasiswa m
            LEFT JOIN pembayaran p ON m.nim = p.nim
            ORDER BY m.nim, p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::debug!("Report generated with {} rows", rows.len());

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_payment, insert_student, setup_test_pool};

    #[tokio::test]
    async fn test_report_has_one_row_per_pair() {
        let pool = setup_test_pool().await;
        insert_student(&pool, "2", "Two Payments", None).await;
        insert_student(&pool, "1", "No Payment", None).await;
        insert_payment(&pool, "2", "2024-01-01", 100, "lunas").await;
        insert_payment(&pool, "2", "2024-02-01", 200, "lunas").await;
        let service = ReportService::new(pool);

        let rows = service.full_report().await.unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].nim, "1");
        assert!(rows[0].paid_on.is_none());
        assert!(rows[0].amount.is_none());
        assert!(rows[0].payment_status.is_none());

        assert_eq!(rows[1].nim, "2");
        assert_eq!(rows[2].nim, "2");
        assert_eq!(rows[1].amount, Some(100));
        assert_eq!(rows[2].amount, Some(200));
    }

    #[tokio::test]
    async fn test_report_empty_store() {
        let pool = setup_test_pool().await;
        let service = ReportService::new(pool);
        assert!(service.full_report().await.unwrap().is_empty());
    }
}
