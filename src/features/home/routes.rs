use axum::{routing::get, Router};

use crate::features::home::handlers;

/// Create the landing page route
pub fn routes() -> Router {
    Router::new().route("/", get(handlers::home_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_home_page() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Sistem Administrasi SPP"));
        assert!(html.contains("/dashboard-dosen"));
    }
}
