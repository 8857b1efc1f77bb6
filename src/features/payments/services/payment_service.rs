use chrono::Local;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::config::PaymentConfig;
use crate::core::error::{AppError, Result};
use crate::features::payments::models::Payment;
use crate::features::students::StudentService;

/// Service for simulated SPP payments
pub struct PaymentService {
    pool: SqlitePool,
    student_service: Arc<StudentService>,
    config: PaymentConfig,
}

impl PaymentService {
    pub fn new(pool: SqlitePool, student_service: Arc<StudentService>, config: PaymentConfig) -> Self {
        Self {
            pool,
            student_service,
            config,
        }
    }

    /// Record a payment dated today with status `lunas`.
    ///
    /// Simulated payments always succeed; repeated calls append further rows.
    pub async fn simulate_payment(&self, nim: &str, amount: Option<i64>) -> Result<Payment> {
        if self.student_service.find_by_nim(nim).await?.is_none() {
            return Err(AppError::NotFound("NIM tidak ditemukan".to_string()));
        }

        let amount = amount.unwrap_or(self.config.default_amount);
        let today = Local::now().date_naive();

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO pembayaran (nim, tanggal_bayar, jumlah, status)
            VALUES (?, ?, ?, 'lunas')
            RETURNING
                id,
                nim,
                tanggal_bayar AS paid_on,
                jumlah AS amount,
                status,
                bukti_bayar AS proof
            "#,
        )
        .bind(nim)
        .bind(today)
        .bind(amount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record payment for {}: {:?}", nim, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Payment recorded: id={}, nim={}, amount={}, date={}",
            payment.id,
            payment.nim,
            payment.amount,
            payment.paid_on
        );

        Ok(payment)
    }
}
