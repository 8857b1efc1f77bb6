use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::payments::handlers;
use crate::features::payments::services::PaymentService;

/// Create routes for the payments feature
pub fn routes(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/api/bayar-spp", post(handlers::pay_tuition))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PaymentConfig;
    use crate::features::students::StudentService;
    use crate::shared::test_helpers::{count_payments, insert_student, setup_test_pool};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> (TestServer, sqlx::SqlitePool) {
        let pool = setup_test_pool().await;
        let student_service = Arc::new(StudentService::new(pool.clone()));
        let service = Arc::new(PaymentService::new(
            pool.clone(),
            student_service,
            PaymentConfig::default(),
        ));
        (TestServer::new(routes(service)).unwrap(), pool)
    }

    #[tokio::test]
    async fn test_payment_success_message_formats_amount() {
        let (server, pool) = server().await;
        insert_student(&pool, "202401001", "Budi Santoso", None).await;

        let response = server
            .post("/api/bayar-spp")
            .json(&json!({"nim": "202401001", "jumlah": 1234567}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "success",
            "message": "Pembayaran SPP sebesar Rp 1,234,567 berhasil!"
        }));
        assert_eq!(count_payments(&pool, "202401001").await, 1);
    }

    #[tokio::test]
    async fn test_payment_default_amount() {
        let (server, pool) = server().await;
        insert_student(&pool, "202401001", "Budi Santoso", None).await;

        let response = server
            .post("/api/bayar-spp")
            .json(&json!({"nim": "202401001"}))
            .await;

        let body: Value = response.json();
        assert_eq!(body["message"], "Pembayaran SPP sebesar Rp 2,500,000 berhasil!");
    }

    #[tokio::test]
    async fn test_payment_unknown_nim() {
        let (server, pool) = server().await;

        let response = server
            .post("/api/bayar-spp")
            .json(&json!({"nim": "999"}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "status": "error",
            "message": "NIM tidak ditemukan"
        }));
        assert_eq!(count_payments(&pool, "999").await, 0);
    }

    #[tokio::test]
    async fn test_payment_missing_nim_is_rejected() {
        let (server, _pool) = server().await;

        let response = server.post("/api/bayar-spp").json(&json!({"jumlah": 100})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_payment_non_positive_amount_is_rejected() {
        let (server, pool) = server().await;
        insert_student(&pool, "1", "A", None).await;

        let response = server
            .post("/api/bayar-spp")
            .json(&json!({"nim": "1", "jumlah": 0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(count_payments(&pool, "1").await, 0);
    }

    #[tokio::test]
    async fn test_payment_malformed_body() {
        let (server, _pool) = server().await;

        let response = server
            .post("/api/bayar-spp")
            .text("not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], "error");
    }
}
