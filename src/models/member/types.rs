use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 3] = [MemberStatus::Pending, MemberStatus::Approved, MemberStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Pending => "pending",
            MemberStatus::Approved => "approved",
            MemberStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(MemberStatus::Pending),
            "approved" => Some(MemberStatus::Approved),
            "rejected" => Some(MemberStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Pending => "Pending",
            MemberStatus::Approved => "Approved",
            MemberStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The registration fields of a member record, as collected by the wizard
/// and accepted by the JSON API (camelCase on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberInput {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub marital_status: String,
    pub occupation: String,
    pub phone: String,
    pub email: String,
    pub hometown: String,
    pub region: String,
    pub residence: String,
    pub gps_address: String,
    pub father_name: String,
    pub father_contact: String,
    pub mother_name: String,
    pub mother_contact: String,
    pub emergency_contact: String,
    pub baptism_status: String,
    pub baptism_date: String,
    pub ministry: String,
    pub home_cell: String,
    pub bible_study_group: String,
    pub photo: String,
}

/// A persisted member row.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub marital_status: String,
    pub occupation: String,
    pub phone: String,
    pub email: String,
    pub hometown: String,
    pub region: String,
    pub residence: String,
    pub gps_address: String,
    pub father_name: String,
    pub father_contact: String,
    pub mother_name: String,
    pub mother_contact: String,
    pub emergency_contact: String,
    pub baptism_status: String,
    pub baptism_date: String,
    pub ministry: String,
    pub home_cell: String,
    pub bible_study_group: String,
    pub photo: String,
    pub status: MemberStatus,
    pub created_at: String,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn has_photo(&self) -> bool {
        !self.photo.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.status == MemberStatus::Pending
    }

    /// Document title used when printing the member sheet.
    pub fn print_title(&self) -> String {
        format!("Member_Record_{}_{}", self.first_name, self.last_name).replace(' ', "_")
    }

    /// Copy of the editable fields, e.g. to pre-fill the edit form.
    pub fn to_input(&self) -> MemberInput {
        MemberInput {
            title: self.title.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            dob: self.dob.clone(),
            marital_status: self.marital_status.clone(),
            occupation: self.occupation.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            hometown: self.hometown.clone(),
            region: self.region.clone(),
            residence: self.residence.clone(),
            gps_address: self.gps_address.clone(),
            father_name: self.father_name.clone(),
            father_contact: self.father_contact.clone(),
            mother_name: self.mother_name.clone(),
            mother_contact: self.mother_contact.clone(),
            emergency_contact: self.emergency_contact.clone(),
            baptism_status: self.baptism_status.clone(),
            baptism_date: self.baptism_date.clone(),
            ministry: self.ministry.clone(),
            home_cell: self.home_cell.clone(),
            bible_study_group: self.bible_study_group.clone(),
            photo: self.photo.clone(),
        }
    }
}

/// Pagination metadata for the member list.
pub struct MemberPage {
    pub members: Vec<Member>,
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

/// Row counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

impl StatusCounts {
    pub fn total(&self) -> i64 {
        self.pending + self.approved + self.rejected
    }
}
