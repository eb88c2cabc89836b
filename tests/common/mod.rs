//! Shared test infrastructure.
//!
//! - `setup_test_db()`: in-memory SQLite with all migrations applied
//! - `valid_input()`: a registration that passes every step
//! - `seed_admin()`: the admin account with `ADMIN_EMAIL` / `ADMIN_PASS`

#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use congregation::auth::password;
use congregation::db;
use congregation::models::member::{self, MemberInput};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_EMAIL: &str = "admin@assembly.local";
pub const ADMIN_PASS: &str = "admin123";

/// A 1x1 transparent PNG.
pub const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Keeps the single in-memory connection alive for the duration of a test.
pub struct TestDb {
    pool: SqlitePool,
}

impl TestDb {
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Fresh in-memory database with the schema applied.
pub async fn setup_test_db() -> TestDb {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid connection string")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");
    db::run_migrations(&pool).await.expect("Failed to run migrations");
    TestDb { pool }
}

pub async fn seed_admin(pool: &SqlitePool) {
    let hash = password::hash_password(ADMIN_PASS).expect("Failed to hash password");
    db::seed_admin(pool, ADMIN_EMAIL, &hash).await.expect("Failed to seed admin");
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn valid_input() -> MemberInput {
    MemberInput {
        title: "Sister".into(),
        first_name: "Ama".into(),
        last_name: "Mensah".into(),
        gender: "Female".into(),
        dob: "1994-03-12".into(),
        marital_status: "Married".into(),
        occupation: "Teacher".into(),
        phone: "+233551234567".into(),
        email: "ama.mensah@example.com".into(),
        hometown: "Kumasi".into(),
        region: "Ashanti".into(),
        residence: "Achimota".into(),
        gps_address: "GA-123-4567".into(),
        father_name: "Kwame Mensah".into(),
        father_contact: "+233241112223".into(),
        mother_name: "Akosua Mensah".into(),
        mother_contact: String::new(),
        emergency_contact: "+233201112223".into(),
        baptism_status: "Baptized".into(),
        baptism_date: "2010-08-01".into(),
        ministry: "Women's Ministry".into(),
        home_cell: "Achimota Cell".into(),
        bible_study_group: "Tuesday Group".into(),
        photo: String::new(),
    }
}

/// Insert a member built from `valid_input()` with a different name and phone.
pub async fn create_member(pool: &SqlitePool, first: &str, last: &str, phone: &str) -> i64 {
    let input = MemberInput {
        first_name: first.into(),
        last_name: last.into(),
        phone: phone.into(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        ..valid_input()
    };
    member::create(pool, &input).await.expect("Failed to create member")
}
