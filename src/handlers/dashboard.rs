use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::member;
use crate::models::stats::MemberStats;
use crate::templates_structs::{DashboardTemplate, PageContext};

const RECENT_PENDING: usize = 5;

pub async fn index(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/dashboard")?;

    let members = member::find_all_summaries(&pool).await?;
    let stats = MemberStats::from_members(&members, Local::now().date_naive());
    let recent_pending = members
        .into_iter()
        .filter(|m| m.is_pending())
        .take(RECENT_PENDING)
        .collect();

    render(DashboardTemplate::new(ctx, stats, recent_pending))
}
