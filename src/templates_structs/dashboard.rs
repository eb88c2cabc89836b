use askama::Template;

use crate::models::member::Member;
use crate::models::stats::{Bucket, MemberStats};
use super::PageContext;

/// A titled bar chart on the dashboard.
pub struct Chart {
    pub title: String,
    pub buckets: Vec<Bucket>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub stats: MemberStats,
    pub charts: Vec<Chart>,
    pub recent_pending: Vec<Member>,
}

impl DashboardTemplate {
    pub fn new(ctx: PageContext, stats: MemberStats, recent_pending: Vec<Member>) -> Self {
        let chart = |title: &str, buckets: &[Bucket]| Chart { title: title.to_string(), buckets: buckets.to_vec() };
        let charts = vec![
            chart("Gender", &stats.gender),
            chart("Age Groups", &stats.age_groups),
            chart("Marital Status", &stats.marital_status),
            chart("Baptism", &stats.baptism),
            chart("Ministries", &stats.ministry),
            chart("Regions", &stats.region),
        ];
        Self { ctx, stats, charts, recent_pending }
    }
}
