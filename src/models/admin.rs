use std::sync::LazyLock;

use sqlx::SqlitePool;

use crate::auth::password;
use crate::errors::AppError;

/// The administrator account, including its password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Email lookup is case- and whitespace-insensitive.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>(
        "SELECT id, email, password_hash FROM admins \
         WHERE LOWER(TRIM(email)) = LOWER(TRIM(?))",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Hash checked when the email is unknown, so both branches pay for one argon2 run.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| password::hash_password("not-the-admin-password").ok());

/// Returns the admin when the email exists and the password matches its hash.
pub async fn verify_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<Admin>, AppError> {
    let Some(admin) = find_by_email(pool, email).await? else {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = password::verify_password(password, hash);
        }
        return Ok(None);
    };
    if password::verify_password(password, &admin.password_hash)? {
        Ok(Some(admin))
    } else {
        Ok(None)
    }
}
