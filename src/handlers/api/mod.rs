//! JSON API under `/api`. Bodies are camelCase; errors are `{ "error": ... }`.

pub mod auth;
pub mod members;
pub mod registration;

use actix_web::HttpResponse;

use crate::templates_structs::ApiErrorResponse;

pub(crate) fn member_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse::new("Member not found"))
}
