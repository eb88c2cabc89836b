use std::io;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use congregation::auth::{password, rate_limit::RateLimiter};
use congregation::config::{AppConfig, DEFAULT_ADMIN_PASSWORD};
use congregation::{db, models, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    // Ensure data directory exists
    db::ensure_data_dir(&config.database_url)?;

    let pool = db::init_pool(&config.database_url).await.map_err(io::Error::other)?;
    db::run_migrations(&pool).await.map_err(io::Error::other)?;

    if config.admin_password == DEFAULT_ADMIN_PASSWORD {
        log::warn!("ADMIN_PASSWORD not set, using the default password; change it before going live");
    }
    let admin_hash = password::hash_password(&config.admin_password).map_err(io::Error::other)?;
    db::seed_admin(&pool, &config.admin_email, &admin_hash)
        .await
        .map_err(io::Error::other)?;

    match models::draft::cleanup_older_than(&pool, config.draft_ttl_hours).await {
        Ok(0) => {}
        Ok(n) => log::info!("Removed {n} stale registration drafts"),
        Err(e) => log::warn!("Draft cleanup failed: {e}"),
    }

    // Session encryption key: SESSION_KEY keeps sessions valid across restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let limiter = web::Data::new(RateLimiter::new());
    let bind_addr = config.bind_addr.clone();
    let max_body = config.max_body_bytes;
    let cookie_secure = config.cookie_secure;
    let config = web::Data::new(config);

    log::info!("Starting {} at http://{bind_addr}", config.app_name);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .app_data(limiter.clone())
            .app_data(routes::form_config(max_body))
            .app_data(routes::json_config(max_body))
            .app_data(routes::payload_config(max_body))
            .configure(routes::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(congregation::handlers::home::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
