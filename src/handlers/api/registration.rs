use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::db::DbPool;
use crate::models::member::{self, MemberInput};
use crate::templates_structs::{ApiErrorResponse, ApiSuccess};

/// POST /api/register - submit a whole registration in one request.
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<MemberInput>,
) -> HttpResponse {
    let input = body.into_inner().normalized();
    let errors = input.validate(Local::now().date_naive());
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(ApiErrorResponse::validation(&errors));
    }

    match member::create(&pool, &input).await {
        Ok(id) => {
            log::info!("New registration #{id} via API");
            HttpResponse::Ok().json(ApiSuccess::created(id))
        }
        Err(e) => {
            log::error!("Registration insert failed: {e}");
            HttpResponse::InternalServerError().json(ApiErrorResponse::new("Registration failed"))
        }
    }
}
