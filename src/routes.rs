use actix_web::{HttpResponse, error::InternalError, middleware::from_fn, web};

use crate::auth::middleware::{require_api_auth, require_auth, require_json_content_type};
use crate::handlers::{
    api, auth_handlers, dashboard, home, member_handlers, registration_handlers,
};
use crate::templates_structs::ApiErrorResponse;

/// Register every route of the application. Shared by `main` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // JSON API
        .service(
            web::scope("/api")
                .wrap(from_fn(require_json_content_type))
                .route("/register", web::post().to(api::registration::register))
                .route("/login", web::post().to(api::auth::login))
                .route("/logout", web::post().to(api::auth::logout))
                .service(
                    web::resource("/stats")
                        .wrap(from_fn(require_api_auth))
                        .route(web::get().to(api::members::stats)),
                )
                .service(
                    web::scope("/members")
                        .wrap(from_fn(require_api_auth))
                        .route("", web::get().to(api::members::list))
                        .route("/{id}", web::get().to(api::members::read))
                        .route("/{id}", web::put().to(api::members::update))
                        .route("/{id}", web::delete().to(api::members::delete))
                        .route("/{id}/approve", web::post().to(api::members::approve))
                        .route("/{id}/reject", web::post().to(api::members::reject)),
                ),
        )
        // Public pages
        .route("/", web::get().to(home::index))
        .route("/register", web::get().to(registration_handlers::start))
        .route("/register/step/{n}", web::get().to(registration_handlers::step_page))
        .route("/register/step/{n}", web::post().to(registration_handlers::step_submit))
        .route("/register/submit", web::post().to(registration_handlers::submit))
        .route("/register/reset", web::post().to(registration_handlers::reset))
        .route("/register/done", web::get().to(registration_handlers::done))
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/logout", web::post().to(auth_handlers::logout))
        // Admin pages
        .service(
            web::scope("")
                .wrap(from_fn(require_auth))
                .route("/dashboard", web::get().to(dashboard::index))
                // export.csv BEFORE /members/{id}
                .route("/members", web::get().to(member_handlers::list::list))
                .route("/members/export.csv", web::get().to(member_handlers::export::export_csv))
                .route("/members/{id}", web::get().to(member_handlers::read::detail))
                .route("/members/{id}", web::post().to(member_handlers::update::update))
                .route("/members/{id}/edit", web::get().to(member_handlers::update::edit_form))
                .route("/members/{id}/approve", web::post().to(member_handlers::status::approve))
                .route("/members/{id}/reject", web::post().to(member_handlers::status::reject))
                .route("/members/{id}/delete", web::post().to(member_handlers::status::delete))
                .default_service(web::to(home::not_found)),
        );
}

/// Form bodies carry the photo data URL, so they get the same limit as JSON.
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default().limit(limit)
}

pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

/// JSON extractor settings: size limit and a JSON body for malformed requests.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let body = ApiErrorResponse {
            error: "Invalid request body".to_string(),
            details: Some(err.to_string()),
        };
        let response = HttpResponse::BadRequest().json(body);
        InternalError::from_response(err, response).into()
    })
}
