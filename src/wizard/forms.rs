use serde::Deserialize;

use super::WizardStep;
use super::phone::compose_phone;
use crate::models::member::MemberInput;

/// Which navigation button submitted a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    #[default]
    Next,
    Back,
}

/// A posted wizard page: knows its step and how to copy itself into the draft.
pub trait StepForm {
    const STEP: WizardStep;

    fn csrf_token(&self) -> &str;
    fn action(&self) -> StepAction;
    fn apply_to(&self, input: &mut MemberInput);
}

/// Step 1: personal information and passport photo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonalForm {
    pub csrf_token: String,
    pub action: StepAction,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub marital_status: String,
    pub occupation: String,
    pub phone_code: String,
    pub phone_number: String,
    pub email: String,
    pub photo: String,
    pub remove_photo: Option<String>,
}

impl StepForm for PersonalForm {
    const STEP: WizardStep = WizardStep::Personal;

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn action(&self) -> StepAction {
        self.action
    }

    fn apply_to(&self, input: &mut MemberInput) {
        input.title = self.title.trim().to_string();
        input.first_name = self.first_name.trim().to_string();
        input.last_name = self.last_name.trim().to_string();
        input.gender = self.gender.trim().to_string();
        input.dob = self.dob.trim().to_string();
        input.marital_status = self.marital_status.trim().to_string();
        input.occupation = self.occupation.trim().to_string();
        input.phone = compose_phone(&self.phone_code, &self.phone_number);
        input.email = self.email.trim().to_string();
        if self.remove_photo.is_some() {
            input.photo.clear();
        } else if !self.photo.is_empty() {
            input.photo = self.photo.trim().to_string();
        }
    }
}

/// Step 2: address and family contacts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressFamilyForm {
    pub csrf_token: String,
    pub action: StepAction,
    pub hometown: String,
    pub region: String,
    pub residence: String,
    pub gps_address: String,
    pub father_name: String,
    pub father_contact_code: String,
    pub father_contact_number: String,
    pub mother_name: String,
    pub mother_contact_code: String,
    pub mother_contact_number: String,
    pub emergency_contact_code: String,
    pub emergency_contact_number: String,
}

impl StepForm for AddressFamilyForm {
    const STEP: WizardStep = WizardStep::AddressFamily;

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn action(&self) -> StepAction {
        self.action
    }

    fn apply_to(&self, input: &mut MemberInput) {
        input.hometown = self.hometown.trim().to_string();
        input.region = self.region.trim().to_string();
        input.residence = self.residence.trim().to_string();
        input.gps_address = self.gps_address.trim().to_uppercase();
        input.father_name = self.father_name.trim().to_string();
        input.father_contact = compose_phone(&self.father_contact_code, &self.father_contact_number);
        input.mother_name = self.mother_name.trim().to_string();
        input.mother_contact = compose_phone(&self.mother_contact_code, &self.mother_contact_number);
        input.emergency_contact =
            compose_phone(&self.emergency_contact_code, &self.emergency_contact_number);
    }
}

/// Step 3: church life.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChurchLifeForm {
    pub csrf_token: String,
    pub action: StepAction,
    pub baptism_status: String,
    pub baptism_date: String,
    pub ministry: String,
    pub home_cell: String,
    pub bible_study_group: String,
}

impl StepForm for ChurchLifeForm {
    const STEP: WizardStep = WizardStep::ChurchLife;

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn action(&self) -> StepAction {
        self.action
    }

    fn apply_to(&self, input: &mut MemberInput) {
        input.baptism_status = self.baptism_status.trim().to_string();
        input.baptism_date = if input.baptism_status == "Not Baptized" {
            String::new()
        } else {
            self.baptism_date.trim().to_string()
        };
        input.ministry = self.ministry.trim().to_string();
        input.home_cell = self.home_cell.trim().to_string();
        input.bible_study_group = self.bible_study_group.trim().to_string();
    }
}
