use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::member::{self, Member, MemberListQuery};

const HEADER: &str = "id,status,title,first_name,last_name,gender,dob,marital_status,occupation,\
phone,email,hometown,region,residence,gps_address,father_name,father_contact,mother_name,\
mother_contact,emergency_contact,baptism_status,baptism_date,ministry,home_cell,\
bible_study_group,created_at\n";

/// A cell a spreadsheet would evaluate as a formula. Plain signed numbers
/// (`+233...` phones) stay as they are.
fn is_formula(s: &str) -> bool {
    match s.chars().next() {
        Some('=' | '@' | '\t' | '\r') => true,
        Some('+' | '-') => !s[1..].chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn escape_csv(s: &str) -> String {
    if is_formula(s) {
        return escape_csv(&format!("'{s}"));
    }
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn csv_row(m: &Member) -> String {
    let fields: [&str; 25] = [
        m.status.as_str(),
        &m.title,
        &m.first_name,
        &m.last_name,
        &m.gender,
        &m.dob,
        &m.marital_status,
        &m.occupation,
        &m.phone,
        &m.email,
        &m.hometown,
        &m.region,
        &m.residence,
        &m.gps_address,
        &m.father_name,
        &m.father_contact,
        &m.mother_name,
        &m.mother_contact,
        &m.emergency_contact,
        &m.baptism_status,
        &m.baptism_date,
        &m.ministry,
        &m.home_cell,
        &m.bible_study_group,
        &m.created_at,
    ];
    let mut row = m.id.to_string();
    for f in fields {
        row.push(',');
        row.push_str(&escape_csv(f));
    }
    row.push('\n');
    row
}

/// Download the filtered member list as CSV. Photos are left out.
pub async fn export_csv(
    pool: web::Data<DbPool>,
    query: web::Query<MemberListQuery>,
) -> Result<HttpResponse, AppError> {
    let members = member::find_all_filtered(&pool, &query.filter(), &query.sort()).await?;

    let mut csv = String::from(HEADER);
    for m in &members {
        csv.push_str(&csv_row(m));
    }

    let today = Local::now().format("%Y-%m-%d");
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(("Content-Disposition", format!("attachment; filename=\"members-{today}.csv\"")))
        .body(csv))
}
