use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub type DbPool = SqlitePool;

pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
}

/// File behind a `sqlite:` URL, or `None` for in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let file = rest.split('?').next().unwrap_or(rest);
    if file.is_empty() || file == ":memory:" {
        None
    } else {
        Some(Path::new(file))
    }
}

/// Create the directory that will hold the database file.
pub fn ensure_data_dir(database_url: &str) -> std::io::Result<()> {
    match sqlite_file_path(database_url).and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Upsert the single admin account (id 1). Configured credentials always win,
/// so changing ADMIN_PASSWORD and restarting rotates the password.
pub async fn seed_admin(pool: &DbPool, email: &str, password_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO admins (id, email, password_hash) VALUES (1, ?1, ?2) \
         ON CONFLICT(id) DO UPDATE SET email = excluded.email, password_hash = excluded.password_hash",
    )
    .bind(email.trim())
    .bind(password_hash)
    .execute(pool)
    .await?;
    log::info!("Admin account seeded for {}", email.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_from_url() {
        assert_eq!(sqlite_file_path("sqlite://data/church.db"), Some(Path::new("data/church.db")));
        assert_eq!(sqlite_file_path("sqlite:app.db?mode=rwc"), Some(Path::new("app.db")));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://x"), None);
    }
}
