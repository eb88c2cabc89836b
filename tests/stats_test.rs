//! Dashboard statistics computed over stored members.

mod common;

use chrono::NaiveDate;
use congregation::models::member::{self, MemberInput, MemberStatus};
use congregation::models::stats::MemberStats;
use common::*;

fn count(buckets: &[congregation::models::stats::Bucket], label: &str) -> i64 {
    buckets
        .iter()
        .find(|b| b.label == label)
        .map(|b| b.count)
        .unwrap_or_else(|| panic!("no bucket '{label}'"))
}

async fn seed(pool: &sqlx::SqlitePool) {
    let people = [
        ("Kofi", "Male", "1990-05-01", "Single", "Greater Accra", "Baptized", "Men's Ministry"),
        ("Ama", "Female", "1960-02-14", "Married", "Ashanti", "Baptized", "Women's Ministry"),
        ("Esi", "Female", "2015-09-30", "Single", "Ashanti", "Not Baptized", "Children's Ministry"),
        ("Yaw", "Male", "2010-01-20", "Single", "Volta", "Not Baptized", "Youth Ministry"),
    ];
    for (first, gender, dob, marital, region, baptism, ministry) in people {
        let input = MemberInput {
            first_name: first.into(),
            gender: gender.into(),
            dob: dob.into(),
            marital_status: marital.into(),
            region: region.into(),
            baptism_status: baptism.into(),
            baptism_date: String::new(),
            ministry: ministry.into(),
            ..valid_input()
        };
        member::create(pool, &input).await.expect("create");
    }
}

#[tokio::test]
async fn test_breakdowns() {
    let db = setup_test_db().await;
    let pool = db.pool();
    seed(pool).await;

    let members = member::find_all(pool).await.expect("find_all");
    member::set_status(pool, members[0].id, MemberStatus::Approved).await.expect("approve");
    let members = member::find_all(pool).await.expect("find_all");

    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let stats = MemberStats::from_members(&members, today);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.pending, 3);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.approval_rate(), 25);

    assert_eq!(count(&stats.gender, "Male"), 2);
    assert_eq!(count(&stats.gender, "Female"), 2);
    assert_eq!(stats.gender[0].percent, 50);
    assert_eq!(count(&stats.marital_status, "Single"), 3);
    assert_eq!(count(&stats.marital_status, "Widowed"), 0);
    assert_eq!(count(&stats.baptism, "Not Baptized"), 2);
    assert_eq!(count(&stats.ministry, "Youth Ministry"), 1);

    // Regions: most members first, then by name.
    assert_eq!(stats.region[0].label, "Ashanti");
    assert_eq!(stats.region[0].count, 2);
    assert_eq!(stats.region[1].label, "Greater Accra");
    assert_eq!(stats.region[2].label, "Volta");

    assert_eq!(count(&stats.age_groups, "Under 13"), 1);
    assert_eq!(count(&stats.age_groups, "13-17"), 1);
    assert_eq!(count(&stats.age_groups, "36-59"), 1);
    assert_eq!(count(&stats.age_groups, "60+"), 1);
    assert_eq!(count(&stats.age_groups, "Unknown"), 0);
}

#[tokio::test]
async fn test_monthly_registrations_include_current_month() {
    let db = setup_test_db().await;
    let pool = db.pool();
    seed(pool).await;

    let members = member::find_all(pool).await.expect("find_all");
    // created_at is stored in UTC; take "today" from the rows themselves.
    let today = NaiveDate::parse_from_str(&members[0].created_at[..10], "%Y-%m-%d").expect("date");
    let stats = MemberStats::from_members(&members, today);

    let current = stats.monthly_registrations.last().expect("months");
    assert_eq!(current.count, 4);
    assert_eq!(current.percent, 100);
    assert!(stats.monthly_registrations[..5].iter().all(|b| b.count == 0));
}
