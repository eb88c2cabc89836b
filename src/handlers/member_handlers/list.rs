use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::member::{self, MemberListQuery};
use crate::templates_structs::{MemberListTemplate, PageContext};

const DEFAULT_PER_PAGE: i64 = 25;

pub async fn list(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<MemberListQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/members")?;

    let filter = query.filter();
    let sort = query.sort();
    let page = member::find_paginated(
        &pool,
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(DEFAULT_PER_PAGE),
        &filter,
        &sort,
    )
    .await?;
    let counts = member::count_by_status(&pool).await?;

    render(MemberListTemplate::new(ctx, page, &filter, &sort, &counts))
}
