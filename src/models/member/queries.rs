use sqlx::SqlitePool;

use super::filter::{MemberFilter, SortSpec, sort_col};
use super::types::{Member, MemberInput, MemberPage, MemberStatus, StatusCounts};

macro_rules! member_columns {
    () => {
        "id, title, first_name, last_name, gender, dob, marital_status, occupation, \
         phone, email, hometown, region, residence, gps_address, \
         father_name, father_contact, mother_name, mother_contact, emergency_contact, \
         baptism_status, baptism_date, ministry, home_cell, bible_study_group, \
         status, created_at"
    };
}

const SELECT_MEMBER: &str = concat!("SELECT ", member_columns!(), ", photo FROM members");

/// Same row shape with the photo left empty, for pages and figures that never show it.
const SELECT_MEMBER_SUMMARY: &str = concat!("SELECT ", member_columns!(), ", '' AS photo FROM members");

/// Insert a new registration. Status starts as pending.
pub async fn create(pool: &SqlitePool, input: &MemberInput) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO members ( \
            title, first_name, last_name, gender, dob, marital_status, occupation, \
            phone, email, hometown, region, residence, gps_address, \
            father_name, father_contact, mother_name, mother_contact, emergency_contact, \
            baptism_status, baptism_date, ministry, home_cell, bible_study_group, photo \
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.title)
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.gender)
    .bind(&input.dob)
    .bind(&input.marital_status)
    .bind(&input.occupation)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(&input.hometown)
    .bind(&input.region)
    .bind(&input.residence)
    .bind(&input.gps_address)
    .bind(&input.father_name)
    .bind(&input.father_contact)
    .bind(&input.mother_name)
    .bind(&input.mother_contact)
    .bind(&input.emergency_contact)
    .bind(&input.baptism_status)
    .bind(&input.baptism_date)
    .bind(&input.ministry)
    .bind(&input.home_cell)
    .bind(&input.bible_study_group)
    .bind(&input.photo)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All members, newest registration first.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Member>, sqlx::Error> {
    let sql = format!("{SELECT_MEMBER} ORDER BY created_at DESC, id DESC");
    sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await
}

/// Like `find_all`, without loading photos. Feeds the dashboard and the stats.
pub async fn find_all_summaries(pool: &SqlitePool) -> Result<Vec<Member>, sqlx::Error> {
    let sql = format!("{SELECT_MEMBER_SUMMARY} ORDER BY created_at DESC, id DESC");
    sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Member>, sqlx::Error> {
    let sql = format!("{SELECT_MEMBER} WHERE id = ?");
    sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Find members with pagination, filter, and sort support. Photos are not loaded.
pub async fn find_paginated(
    pool: &SqlitePool,
    page: i64,
    per_page: i64,
    filter: &MemberFilter,
    sort: &SortSpec,
) -> Result<MemberPage, sqlx::Error> {
    let page = page.max(1);
    let per_page = per_page.clamp(1, 100);
    let offset = (page - 1) * per_page;

    let (where_clause, binds) = filter.where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM members WHERE {where_clause}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for b in &binds {
        count_query = count_query.bind(b);
    }
    let total_count = count_query.fetch_one(pool).await?;

    let data_sql = format!(
        "{SELECT_MEMBER_SUMMARY} WHERE {where_clause} ORDER BY {} {}, id {} LIMIT ? OFFSET ?",
        sort_col(&sort.column),
        sort.sql_dir(),
        sort.sql_dir(),
    );
    let mut data_query = sqlx::query_as::<_, Member>(&data_sql);
    for b in &binds {
        data_query = data_query.bind(b);
    }
    let members = data_query
        .bind(per_page)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    let total_pages = (total_count + per_page - 1) / per_page;

    Ok(MemberPage { members, page, per_page, total_count, total_pages })
}

/// Return all members matching the filter (no pagination), used for CSV export and the API list.
pub async fn find_all_filtered(
    pool: &SqlitePool,
    filter: &MemberFilter,
    sort: &SortSpec,
) -> Result<Vec<Member>, sqlx::Error> {
    let (where_clause, binds) = filter.where_clause();
    let sql = format!(
        "{SELECT_MEMBER} WHERE {where_clause} ORDER BY {} {}, id {}",
        sort_col(&sort.column),
        sort.sql_dir(),
        sort.sql_dir(),
    );
    let mut query = sqlx::query_as::<_, Member>(&sql);
    for b in &binds {
        query = query.bind(b);
    }
    query.fetch_all(pool).await
}

/// Overwrite every registration field of a member. Status and creation time are kept.
/// Returns false when no member has that id.
pub async fn update(pool: &SqlitePool, id: i64, input: &MemberInput) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE members SET \
            title = ?, first_name = ?, last_name = ?, gender = ?, dob = ?, \
            marital_status = ?, occupation = ?, phone = ?, email = ?, \
            hometown = ?, region = ?, residence = ?, gps_address = ?, \
            father_name = ?, father_contact = ?, mother_name = ?, mother_contact = ?, \
            emergency_contact = ?, baptism_status = ?, baptism_date = ?, \
            ministry = ?, home_cell = ?, bible_study_group = ?, photo = ? \
         WHERE id = ?",
    )
    .bind(&input.title)
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.gender)
    .bind(&input.dob)
    .bind(&input.marital_status)
    .bind(&input.occupation)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(&input.hometown)
    .bind(&input.region)
    .bind(&input.residence)
    .bind(&input.gps_address)
    .bind(&input.father_name)
    .bind(&input.father_contact)
    .bind(&input.mother_name)
    .bind(&input.mother_contact)
    .bind(&input.emergency_contact)
    .bind(&input.baptism_status)
    .bind(&input.baptism_date)
    .bind(&input.ministry)
    .bind(&input.home_cell)
    .bind(&input.bible_study_group)
    .bind(&input.photo)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Approve or reject (or reset to pending). Returns false when no member has that id.
pub async fn set_status(pool: &SqlitePool, id: i64, status: MemberStatus) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE members SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM members WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_by_status(pool: &SqlitePool) -> Result<StatusCounts, sqlx::Error> {
    let rows: Vec<(MemberStatus, i64)> =
        sqlx::query_as("SELECT status, COUNT(*) FROM members GROUP BY status")
            .fetch_all(pool)
            .await?;

    let mut counts = StatusCounts::default();
    for (status, n) in rows {
        match status {
            MemberStatus::Pending => counts.pending = n,
            MemberStatus::Approved => counts.approved = n,
            MemberStatus::Rejected => counts.rejected = n,
        }
    }
    Ok(counts)
}
