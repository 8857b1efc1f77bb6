use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::clearance::handlers;
use crate::features::clearance::services::ClearanceService;

/// Create routes for activation and letter download
pub fn routes(service: Arc<ClearanceService>) -> Router {
    Router::new()
        .route("/api/aktivasi/{nim}", post(handlers::activate_student))
        .route("/download-surat/{nim}", get(handlers::download_letter))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LetterConfig;
    use crate::features::students::StudentService;
    use crate::modules::storage::LetterStore;
    use crate::shared::test_helpers::{insert_student, setup_test_pool};
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    async fn server() -> (TestServer, sqlx::SqlitePool, TempDir) {
        let pool = setup_test_pool().await;
        let dir = tempfile::tempdir().unwrap();
        let letters = LetterConfig {
            output_dir: dir.path().to_path_buf(),
            ..LetterConfig::default()
        };
        let service = Arc::new(ClearanceService::new(
            Arc::new(StudentService::new(pool.clone())),
            Arc::new(LetterStore::new(dir.path())),
            letters,
            false,
        ));
        (TestServer::new(routes(service)).unwrap(), pool, dir)
    }

    #[tokio::test]
    async fn test_activate_then_download() {
        let (server, pool, dir) = server().await;
        insert_student(&pool, "202401001", "Budi Santoso", None).await;

        let response = server.get("/download-surat/202401001").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.post("/api/aktivasi/202401001").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "success",
            "message": "Mahasiswa 202401001 berhasil diaktivasi!",
            "surat_url": "/download-surat/202401001"
        }));

        let written = std::fs::read(dir.path().join("surat_bebas_202401001.txt")).unwrap();

        let response = server.get("/download-surat/202401001").await;
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), written.as_slice());
        assert_eq!(
            response.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"surat_bebas_202401001.txt\""
        );
    }

    #[tokio::test]
    async fn test_activate_unknown_nim() {
        let (server, _pool, dir) = server().await;

        let response = server.post("/api/aktivasi/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["status"], "error");
        assert!(body.get("surat_url").is_none());

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_download_rejects_unsafe_nim() {
        let (server, _pool, _dir) = server().await;

        let response = server.get("/download-surat/..%2Fspp.db").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
