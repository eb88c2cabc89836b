use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::member::{self, MemberInput, MemberListQuery, MemberStatus};
use crate::models::stats::MemberStats;
use crate::templates_structs::{ApiErrorResponse, ApiSuccess};
use super::member_not_found;

/// GET /api/members - newest first, optional `q` and `status`.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<MemberListQuery>,
) -> Result<HttpResponse, AppError> {
    let members = member::find_all_filtered(&pool, &query.filter(), &query.sort()).await?;
    Ok(HttpResponse::Ok().json(members))
}

/// GET /api/members/{id}
pub async fn read(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match member::find_by_id(&pool, path.into_inner()).await? {
        Some(m) => Ok(HttpResponse::Ok().json(m)),
        None => Ok(member_not_found()),
    }
}

async fn change_status(pool: &DbPool, id: i64, status: MemberStatus) -> Result<HttpResponse, AppError> {
    if member::set_status(pool, id, status).await? {
        log::info!("Member #{id} marked {status} via API");
        Ok(HttpResponse::Ok().json(ApiSuccess::ok()))
    } else {
        Ok(member_not_found())
    }
}

/// POST /api/members/{id}/approve
pub async fn approve(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    change_status(&pool, path.into_inner(), MemberStatus::Approved).await
}

/// POST /api/members/{id}/reject
pub async fn reject(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    change_status(&pool, path.into_inner(), MemberStatus::Rejected).await
}

/// PUT /api/members/{id} - overwrite every registration field.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<MemberInput>,
) -> HttpResponse {
    let id = path.into_inner();
    let input = body.into_inner().normalized();
    let errors = input.validate(Local::now().date_naive());
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(ApiErrorResponse::validation(&errors));
    }

    match member::update(&pool, id, &input).await {
        Ok(true) => {
            log::info!("Member #{id} updated via API");
            HttpResponse::Ok().json(ApiSuccess::ok())
        }
        Ok(false) => member_not_found(),
        Err(e) => {
            log::error!("Member #{id} update failed: {e}");
            HttpResponse::InternalServerError().json(ApiErrorResponse::new("Update failed"))
        }
    }
}

/// DELETE /api/members/{id}
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if member::delete(&pool, id).await? {
        log::info!("Member #{id} deleted via API");
        Ok(HttpResponse::Ok().json(ApiSuccess::ok()))
    } else {
        Ok(member_not_found())
    }
}

/// GET /api/stats
pub async fn stats(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let members = member::find_all_summaries(&pool).await?;
    Ok(HttpResponse::Ok().json(MemberStats::from_members(&members, Local::now().date_naive())))
}
