use sqlx::SqlitePool;

use crate::wizard::RegistrationDraft;

/// Load an in-progress registration. Unreadable rows are treated as missing.
pub async fn load(pool: &SqlitePool, token: &str) -> Result<Option<RegistrationDraft>, sqlx::Error> {
    let data: Option<String> =
        sqlx::query_scalar("SELECT data FROM registration_drafts WHERE token = ?")
            .bind(token)
            .fetch_optional(pool)
            .await?;

    Ok(data.and_then(|json| match serde_json::from_str(&json) {
        Ok(draft) => Some(draft),
        Err(e) => {
            log::warn!("Discarding unreadable registration draft: {e}");
            None
        }
    }))
}

pub async fn save(pool: &SqlitePool, token: &str, draft: &RegistrationDraft) -> Result<(), sqlx::Error> {
    let data = serde_json::to_string(draft).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    sqlx::query(
        "INSERT INTO registration_drafts (token, data, updated_at) \
         VALUES (?1, ?2, strftime('%Y-%m-%d %H:%M:%S', 'now')) \
         ON CONFLICT(token) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
    )
    .bind(token)
    .bind(data)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM registration_drafts WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove drafts untouched for more than `hours`. Returns how many were removed.
pub async fn cleanup_older_than(pool: &SqlitePool, hours: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM registration_drafts \
         WHERE updated_at < strftime('%Y-%m-%d %H:%M:%S', 'now', ?)",
    )
    .bind(format!("-{} hours", hours.max(0)))
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
