//! Shared test utilities: in-memory store setup and row fixtures.

#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// In-memory SQLite store with the schema applied.
///
/// The pool holds exactly one connection that never expires, since every
/// new `sqlite::memory:` connection would open a separate empty database.
#[cfg(test)]
pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    crate::core::database::run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Insert an advisor, returning its id
#[cfg(test)]
pub async fn insert_advisor(pool: &SqlitePool, code: &str, name: &str) -> i64 {
    sqlx::query("INSERT INTO dosen (kode_dosen, nama, email) VALUES (?, ?, ?)")
        .bind(code)
        .bind(name)
        .bind(format!("{}@univ.ac.id", code.to_lowercase()))
        .execute(pool)
        .await
        .expect("failed to insert advisor")
        .last_insert_rowid()
}

/// Insert a pending student
#[cfg(test)]
pub async fn insert_student(pool: &SqlitePool, nim: &str, name: &str, advisor_id: Option<i64>) {
    sqlx::query(
        "INSERT INTO mahasiswa (nim, nama, email, id_dosen, status_administrasi) VALUES (?, ?, ?, ?, 'pending')",
    )
    .bind(nim)
    .bind(name)
    .bind(format!("{}@student.univ.ac.id", nim))
    .bind(advisor_id)
    .execute(pool)
    .await
    .expect("failed to insert student");
}

/// Insert a payment row with an explicit date (`YYYY-MM-DD`) and status
#[cfg(test)]
pub async fn insert_payment(pool: &SqlitePool, nim: &str, date: &str, amount: i64, status: &str) {
    sqlx::query("INSERT INTO pembayaran (nim, tanggal_bayar, jumlah, status) VALUES (?, ?, ?, ?)")
        .bind(nim)
        .bind(date)
        .bind(amount)
        .bind(status)
        .execute(pool)
        .await
        .expect("failed to insert payment");
}

/// Set a student's administrative status directly
#[cfg(test)]
pub async fn set_student_status(pool: &SqlitePool, nim: &str, status: &str) {
    sqlx::query("UPDATE mahasiswa SET status_administrasi = ? WHERE nim = ?")
        .bind(status)
        .bind(nim)
        .execute(pool)
        .await
        .expect("failed to update student status");
}

/// Number of payment rows for a NIM
#[cfg(test)]
pub async fn count_payments(pool: &SqlitePool, nim: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM pembayaran WHERE nim = ?")
        .bind(nim)
        .fetch_one(pool)
        .await
        .expect("failed to count payments")
}
