pub mod api;
pub mod auth_handlers;
pub mod dashboard;
pub mod home;
pub mod member_handlers;
pub mod registration_handlers;

use actix_web::HttpResponse;
use serde::Deserialize;

/// Body of the small POST forms that only carry a CSRF token.
#[derive(Deserialize)]
pub struct CsrfOnly {
    #[serde(default)]
    pub csrf_token: String,
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
