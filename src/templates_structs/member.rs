use askama::Template;

use crate::models::member::options::{BAPTISM_STATUSES, GENDERS, MARITAL_STATUSES, MINISTRIES, REGIONS, TITLES};
use crate::models::member::{Member, MemberFilter, MemberInput, MemberPage, MemberStatus, SortSpec, StatusCounts};
use crate::wizard::WizardStep;
use super::{PageContext, PhoneField, SelectOption, select_options};

/// One "All / Pending / Approved / Rejected" tab above the member table.
pub struct StatusTab {
    pub label: String,
    pub count: i64,
    pub href: String,
    pub active: bool,
}

impl StatusTab {
    pub fn build_all(filter: &MemberFilter, counts: &StatusCounts) -> Vec<StatusTab> {
        let with_status = |status: Option<MemberStatus>| {
            let tab_filter = MemberFilter { q: filter.q.clone(), status };
            let qs = tab_filter.query_string();
            if qs.is_empty() { "/members".to_string() } else { format!("/members?{qs}") }
        };
        let mut tabs = vec![StatusTab {
            label: "All".to_string(),
            count: counts.total(),
            href: with_status(None),
            active: filter.status.is_none(),
        }];
        for status in MemberStatus::ALL {
            let count = match status {
                MemberStatus::Pending => counts.pending,
                MemberStatus::Approved => counts.approved,
                MemberStatus::Rejected => counts.rejected,
            };
            tabs.push(StatusTab {
                label: status.label().to_string(),
                count,
                href: with_status(Some(status)),
                active: filter.status == Some(status),
            });
        }
        tabs
    }
}

#[derive(Template)]
#[template(path = "members/list.html")]
pub struct MemberListTemplate {
    pub ctx: PageContext,
    pub page: MemberPage,
    pub q: String,
    pub status: String,
    pub status_tabs: Vec<StatusTab>,
    pub sort_key: String,
    pub sort_dir: String,
    pub filter_qs: String,
}

impl MemberListTemplate {
    pub fn new(
        ctx: PageContext,
        page: MemberPage,
        filter: &MemberFilter,
        sort: &SortSpec,
        counts: &StatusCounts,
    ) -> Self {
        Self {
            ctx,
            page,
            q: filter.q.clone().unwrap_or_default(),
            status: filter.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
            status_tabs: StatusTab::build_all(filter, counts),
            sort_key: sort.column.clone(),
            sort_dir: sort.dir_str().to_string(),
            filter_qs: filter.query_string(),
        }
    }

    /// Link for a column header: flips direction when already sorted by it.
    pub fn sort_href(&self, key: &str) -> String {
        let dir = if self.sort_key == key && self.sort_dir == "asc" { "desc" } else { "asc" };
        let mut href = format!("/members?sort={key}&dir={dir}");
        if !self.filter_qs.is_empty() {
            href.push('&');
            href.push_str(&self.filter_qs);
        }
        href
    }

    pub fn sort_marker(&self, key: &str) -> &'static str {
        match (self.sort_key == key, self.sort_dir.as_str()) {
            (true, "asc") => "▲",
            (true, _) => "▼",
            _ => "",
        }
    }

    pub fn page_href(&self, page: i64) -> String {
        let mut href = format!("/members?page={page}");
        if !self.sort_key.is_empty() {
            href.push_str(&format!("&sort={}&dir={}", self.sort_key, self.sort_dir));
        }
        if !self.filter_qs.is_empty() {
            href.push('&');
            href.push_str(&self.filter_qs);
        }
        href
    }

    pub fn export_href(&self) -> String {
        if self.filter_qs.is_empty() {
            "/members/export.csv".to_string()
        } else {
            format!("/members/export.csv?{}", self.filter_qs)
        }
    }
}

pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// A titled block of label/value rows on the review page and the member sheet.
pub struct DetailSection {
    pub title: String,
    pub edit_path: Option<String>,
    pub rows: Vec<DetailRow>,
}

fn row(label: &str, value: &str) -> DetailRow {
    DetailRow {
        label: label.to_string(),
        value: if value.trim().is_empty() { "N/A".to_string() } else { value.to_string() },
    }
}

/// Groups the fields of a registration the way the wizard collects them.
/// With `wizard_links` each section links back to the step that edits it.
pub fn member_sections(input: &MemberInput, wizard_links: bool) -> Vec<DetailSection> {
    let link = |step: WizardStep| wizard_links.then(|| step.path());
    vec![
        DetailSection {
            title: "Personal Information".to_string(),
            edit_path: link(WizardStep::Personal),
            rows: vec![
                row("Title", &input.title),
                row("First Name", &input.first_name),
                row("Last Name", &input.last_name),
                row("Gender", &input.gender),
                row("Date of Birth", &input.dob),
                row("Marital Status", &input.marital_status),
                row("Occupation", &input.occupation),
                row("Phone", &input.phone),
                row("Email", &input.email),
            ],
        },
        DetailSection {
            title: "Address".to_string(),
            edit_path: link(WizardStep::AddressFamily),
            rows: vec![
                row("Hometown", &input.hometown),
                row("Region", &input.region),
                row("Residence", &input.residence),
                row("GPS Address", &input.gps_address),
            ],
        },
        DetailSection {
            title: "Family & Emergency".to_string(),
            edit_path: link(WizardStep::AddressFamily),
            rows: vec![
                row("Father's Name", &input.father_name),
                row("Father's Contact", &input.father_contact),
                row("Mother's Name", &input.mother_name),
                row("Mother's Contact", &input.mother_contact),
                row("Emergency Contact", &input.emergency_contact),
            ],
        },
        DetailSection {
            title: "Church Life".to_string(),
            edit_path: link(WizardStep::ChurchLife),
            rows: vec![
                row("Baptism Status", &input.baptism_status),
                row("Baptism Date", &input.baptism_date),
                row("Ministry", &input.ministry),
                row("Home Cell", &input.home_cell),
                row("Bible Study Group", &input.bible_study_group),
            ],
        },
    ]
}

#[derive(Template)]
#[template(path = "members/detail.html")]
pub struct MemberDetailTemplate {
    pub ctx: PageContext,
    pub member: Member,
    pub sections: Vec<DetailSection>,
}

impl MemberDetailTemplate {
    pub fn new(ctx: PageContext, member: Member) -> Self {
        let sections = member_sections(&member.to_input(), false);
        Self { ctx, member, sections }
    }
}

#[derive(Template)]
#[template(path = "members/form.html")]
pub struct MemberFormTemplate {
    pub ctx: PageContext,
    pub member_id: i64,
    pub full_name: String,
    pub input: MemberInput,
    pub errors: Vec<String>,
    pub titles: Vec<SelectOption>,
    pub genders: Vec<SelectOption>,
    pub marital_statuses: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
    pub baptism_statuses: Vec<SelectOption>,
    pub ministries: Vec<SelectOption>,
    pub phone: PhoneField,
    pub father_contact: PhoneField,
    pub mother_contact: PhoneField,
    pub emergency_contact: PhoneField,
}

impl MemberFormTemplate {
    pub fn new(ctx: PageContext, member_id: i64, full_name: String, input: MemberInput, errors: Vec<String>) -> Self {
        Self {
            ctx,
            member_id,
            full_name,
            errors,
            titles: select_options(TITLES, &input.title),
            genders: select_options(GENDERS, &input.gender),
            marital_statuses: select_options(MARITAL_STATUSES, &input.marital_status),
            regions: select_options(REGIONS, &input.region),
            baptism_statuses: select_options(BAPTISM_STATUSES, &input.baptism_status),
            ministries: select_options(MINISTRIES, &input.ministry),
            phone: PhoneField::new("phone", "Phone Number", &input.phone, true),
            father_contact: PhoneField::new("father_contact", "Father's Contact", &input.father_contact, false),
            mother_contact: PhoneField::new("mother_contact", "Mother's Contact", &input.mother_contact, false),
            emergency_contact: PhoneField::new(
                "emergency_contact",
                "Emergency Contact Number",
                &input.emergency_contact,
                true,
            ),
            input,
        }
    }
}
