use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{HomeTemplate, PublicContext};

pub async fn index(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PublicContext::build(&session, &config);
    render(HomeTemplate { ctx })
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/errors/404.html"))
}
