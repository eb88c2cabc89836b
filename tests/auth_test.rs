//! Authentication tests: password hashing, the seeded admin and credential checks.

mod common;

use congregation::auth::password;
use congregation::db;
use congregation::models::admin;
use common::*;

#[test]
fn test_hash_password_randomness() {
    let hash1 = password::hash_password(ADMIN_PASS).expect("Failed to hash first password");
    let hash2 = password::hash_password(ADMIN_PASS).expect("Failed to hash second password");

    // Same password should produce different hashes (different salts)
    assert_ne!(hash1, hash2);
    assert!(password::verify_password(ADMIN_PASS, &hash1).expect("verify 1"));
    assert!(password::verify_password(ADMIN_PASS, &hash2).expect("verify 2"));
    assert!(!password::verify_password("wrong", &hash1).expect("verify wrong"));
}

#[tokio::test]
async fn test_verify_credentials() {
    let db = setup_test_db().await;
    let pool = db.pool();
    seed_admin(pool).await;

    let ok = admin::verify_credentials(pool, ADMIN_EMAIL, ADMIN_PASS).await.expect("verify");
    assert_eq!(ok.map(|a| a.email), Some(ADMIN_EMAIL.to_string()));

    let wrong_pass = admin::verify_credentials(pool, ADMIN_EMAIL, "nope").await.expect("verify");
    assert!(wrong_pass.is_none());

    let wrong_email = admin::verify_credentials(pool, "someone@else.org", ADMIN_PASS).await.expect("verify");
    assert!(wrong_email.is_none());
}

#[tokio::test]
async fn test_email_lookup_ignores_case_and_spaces() {
    let db = setup_test_db().await;
    let pool = db.pool();
    seed_admin(pool).await;

    let found = admin::find_by_email(pool, "  Admin@Assembly.LOCAL ").await.expect("query");
    assert!(found.is_some());
}

#[tokio::test]
async fn test_reseed_rotates_password() {
    let db = setup_test_db().await;
    let pool = db.pool();
    seed_admin(pool).await;

    let new_hash = password::hash_password("n3w-secret").expect("hash");
    db::seed_admin(pool, ADMIN_EMAIL, &new_hash).await.expect("reseed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
        .fetch_one(pool)
        .await
        .expect("count");
    assert_eq!(count, 1, "there is exactly one admin account");

    assert!(admin::verify_credentials(pool, ADMIN_EMAIL, ADMIN_PASS).await.expect("old").is_none());
    assert!(admin::verify_credentials(pool, ADMIN_EMAIL, "n3w-secret").await.expect("new").is_some());
}

#[tokio::test]
async fn test_unknown_email_runs_hash_check_and_fails() {
    let db = setup_test_db().await;
    let pool = db.pool();

    // No admin yet: the lookup misses and the fallback hash is checked instead.
    for guess in ["", ADMIN_PASS, "not-the-admin-password"] {
        let found = admin::verify_credentials(pool, ADMIN_EMAIL, guess).await.expect("verify");
        assert!(found.is_none());
    }
}
