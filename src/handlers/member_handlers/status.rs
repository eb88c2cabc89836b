use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::{CsrfOnly, see_other};
use crate::models::member::{self, MemberStatus};

async fn change_status(
    pool: &DbPool,
    session: &Session,
    id: i64,
    status: MemberStatus,
) -> Result<HttpResponse, AppError> {
    if !member::set_status(pool, id, status).await? {
        return Err(AppError::NotFound);
    }
    log::info!("Member #{id} marked {status}");
    set_flash(session, &format!("Member {}", status.as_str()));
    Ok(see_other(&format!("/members/{id}")))
}

pub async fn approve(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    change_status(&pool, &session, path.into_inner(), MemberStatus::Approved).await
}

pub async fn reject(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    change_status(&pool, &session, path.into_inner(), MemberStatus::Rejected).await
}

pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    if !member::delete(&pool, id).await? {
        return Err(AppError::NotFound);
    }
    log::info!("Member #{id} deleted");
    set_flash(&session, "Member deleted");
    Ok(see_other("/members"))
}
