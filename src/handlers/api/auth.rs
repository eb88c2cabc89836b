use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::rate_limit::RateLimiter;
use crate::auth::session::{sign_in, sign_out};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::auth_handlers::client_ip;
use crate::models::admin;
use crate::templates_structs::{ApiErrorResponse, ApiSuccess, LoginRequest};

/// POST /api/login
pub async fn login(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<LoginRequest>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    let ip = client_ip(&req);
    if limiter.is_blocked(ip) {
        return Ok(HttpResponse::TooManyRequests()
            .json(ApiErrorResponse::new("Too many failed login attempts. Please try again later.")));
    }

    match admin::verify_credentials(&pool, &body.email, &body.password).await? {
        Some(found) => {
            limiter.clear(ip);
            sign_in(&session, found.id, &found.email)?;
            log::info!("Administrator {} signed in via API", found.email);
            Ok(HttpResponse::Ok().json(ApiSuccess::ok()))
        }
        None => {
            limiter.record_failure(ip);
            log::warn!("Failed API login for '{}' from {ip}", body.email.trim());
            Ok(HttpResponse::Unauthorized().json(ApiErrorResponse::new("Invalid credentials")))
        }
    }
}

/// POST /api/logout
pub async fn logout(session: Session) -> HttpResponse {
    sign_out(&session);
    HttpResponse::Ok().json(ApiSuccess::ok())
}
