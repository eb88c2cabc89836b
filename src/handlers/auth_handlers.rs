use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};

use crate::auth::csrf;
use crate::auth::rate_limit::RateLimiter;
use crate::auth::session::{get_admin_id, sign_in, sign_out};
use crate::auth::validate::validate_email;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::handlers::{CsrfOnly, see_other};
use crate::models::admin;
use crate::templates_structs::{LoginTemplate, PublicContext};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub csrf_token: String,
}

pub(crate) fn client_ip(req: &HttpRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

fn login_form(session: &Session, config: &AppConfig, error: Option<&str>, email: &str) -> Result<HttpResponse, AppError> {
    let tmpl = LoginTemplate {
        ctx: PublicContext::build(session, config),
        error: error.map(String::from),
        email: email.to_string(),
    };
    render(tmpl)
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if get_admin_id(&session).is_some() {
        return Ok(see_other("/dashboard"));
    }
    login_form(&session, &config, None, "")
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE any database access
    let ip = client_ip(&req);
    if limiter.is_blocked(ip) {
        return login_form(
            &session,
            &config,
            Some("Too many failed login attempts. Please try again later."),
            &form.email,
        );
    }

    if let Some(error) = validate_email(&form.email) {
        return login_form(&session, &config, Some(&error), &form.email);
    }

    match admin::verify_credentials(&pool, &form.email, &form.password).await? {
        Some(found) => {
            limiter.clear(ip);
            sign_in(&session, found.id, &found.email)?;
            log::info!("Administrator {} signed in", found.email);
            Ok(see_other("/dashboard"))
        }
        None => {
            limiter.record_failure(ip);
            log::warn!("Failed login for '{}' from {ip}", form.email.trim());
            login_form(&session, &config, Some("Invalid email or password"), &form.email)
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    sign_out(&session);
    Ok(see_other("/login"))
}
