use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::students::dtos::StudentStatusDto;
use crate::features::students::models::Student;

/// Service for student lookups and administrative status changes
pub struct StudentService {
    pool: SqlitePool,
}

impl StudentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a student by NIM
    pub async fn find_by_nim(&self, nim: &str) -> Result<Option<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT
                id,
                nim,
                nama AS name,
                email,
                id_dosen AS advisor_id,
                status_administrasi AS status
            FROM mahasiswa
            WHERE nim = ?
            "#,
        )
        .bind(nim)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch student {}: {:?}", nim, e);
            AppError::Database(e)
        })
    }

    /// Find a student together with their most recent payment.
    ///
    /// A student without payments is still returned, with null payment fields.
    pub async fn find_status(&self, nim: &str) -> Result<Option<StudentStatusDto>> {
        sqlx::query_as::<_, StudentStatusDto>(
            r#"
            SELECT
                m.nim,
                m.nama AS name,
                m.email,
                m.status_administrasi AS status,
                p.tanggal_bayar AS paid_on,
                p.jumlah AS amount,
                p.status AS payment_status
            FROM mahasiswa m
            LEFT JOIN pembayaran p ON m.nim = p.nim
            WHERE m.nim = ?
            ORDER BY p.tanggal_bayar DESC, p.id DESC
            LIMIT 1
            "#,
        )
        .bind(nim)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch status for {}: {:?}", nim, e);
            AppError::Database(e)
        })
    }

    /// Whether the student has at least one `lunas` payment
    pub async fn has_paid(&self, nim: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pembayaran WHERE nim = ? AND status = 'lunas'",
        )
        .bind(nim)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check payments for {}: {:?}", nim, e);
            AppError::Database(e)
        })?;

        Ok(count > 0)
    }

    /// Set `status_administrasi` to active. Returns the number of rows updated.
    pub async fn mark_active(&self, nim: &str) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE mahasiswa SET status_administrasi = 'active' WHERE nim = ?",
        )
        .bind(nim)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to activate student {}: {:?}", nim, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected())
    }
}
