use crate::core::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Open a pool against an existing store file.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(false);
    pool_options(config).connect_with(options).await
}

/// Open a pool, creating the store file when it does not exist yet.
pub async fn create_pool_for_setup(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
    pool_options(config).connect_with(options).await
}

fn pool_options(config: &DatabaseConfig) -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
}

/// Apply the schema in `migrations/`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Seed the sample advisor and student. Existing rows are left untouched.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR IGNORE INTO dosen (id, kode_dosen, nama, email) VALUES (1, 'DOS001', 'Dr. Ahmad', 'ahmad@univ.ac.id')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT OR IGNORE INTO mahasiswa (id, nim, nama, email, id_dosen, status_administrasi)
        VALUES (1, '202401001', 'Budi Santoso', 'budi@student.univ.ac.id', 1, 'pending')
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::setup_test_pool;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = setup_test_pool().await;

        seed_sample_data(&pool).await.unwrap();
        seed_sample_data(&pool).await.unwrap();

        let students: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mahasiswa")
            .fetch_one(&pool)
            .await
            .unwrap();
        let advisors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dosen")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(students, 1);
        assert_eq!(advisors, 1);
    }

    #[tokio::test]
    async fn test_create_pool_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("missing.db").display()),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 60,
            max_lifetime_secs: 60,
        };

        assert!(create_pool(&config).await.is_err());

        let pool = create_pool_for_setup(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        assert!(dir.path().join("missing.db").exists());
    }
}
