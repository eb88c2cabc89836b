use chrono::NaiveDate;

use super::options::{BAPTISM_STATUSES, GENDERS, MARITAL_STATUSES, MINISTRIES, REGIONS, TITLES};
use super::types::MemberInput;
use crate::auth::validate::{
    validate_choice, validate_optional, validate_optional_email, validate_past_date, validate_phone,
    validate_required,
};
use crate::wizard::photo;

const NAME_MAX: usize = 100;
const TEXT_MAX: usize = 200;
const NOT_BAPTIZED: &str = "Not Baptized";

impl MemberInput {
    /// Trim surrounding whitespace from every text field (the photo is left alone)
    /// and drop the baptism date of members who are not baptized.
    /// Every write path goes through this before validation.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.title,
            &mut self.first_name,
            &mut self.last_name,
            &mut self.gender,
            &mut self.dob,
            &mut self.marital_status,
            &mut self.occupation,
            &mut self.phone,
            &mut self.email,
            &mut self.hometown,
            &mut self.region,
            &mut self.residence,
            &mut self.gps_address,
            &mut self.father_name,
            &mut self.father_contact,
            &mut self.mother_name,
            &mut self.mother_contact,
            &mut self.emergency_contact,
            &mut self.baptism_status,
            &mut self.baptism_date,
            &mut self.ministry,
            &mut self.home_cell,
            &mut self.bible_study_group,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
        if self.baptism_status == NOT_BAPTIZED {
            self.baptism_date.clear();
        }
        self
    }

    /// Personal information: the first wizard step.
    pub fn validate_personal(&self, today: NaiveDate) -> Vec<String> {
        let mut errors = vec![];
        errors.extend(validate_choice(&self.title, "Title", TITLES));
        errors.extend(validate_required(&self.first_name, "First name", NAME_MAX));
        errors.extend(validate_required(&self.last_name, "Last name", NAME_MAX));
        errors.extend(validate_choice(&self.gender, "Gender", GENDERS));
        errors.extend(validate_past_date(&self.dob, "Date of birth", true, today));
        errors.extend(validate_choice(&self.marital_status, "Marital status", MARITAL_STATUSES));
        errors.extend(validate_optional(&self.occupation, "Occupation", TEXT_MAX));
        errors.extend(validate_phone(&self.phone, "Phone number", true));
        errors.extend(validate_optional_email(&self.email));
        if let Err(e) = photo::validate_data_url(&self.photo) {
            errors.push(e.to_string());
        }
        errors
    }

    /// Address and family: the second wizard step.
    pub fn validate_address_family(&self) -> Vec<String> {
        let mut errors = vec![];
        errors.extend(validate_required(&self.hometown, "Hometown", TEXT_MAX));
        errors.extend(validate_choice(&self.region, "Region", REGIONS));
        errors.extend(validate_required(&self.residence, "Place of residence", TEXT_MAX));
        errors.extend(validate_optional(&self.gps_address, "Digital address", 50));
        errors.extend(validate_optional(&self.father_name, "Father's name", NAME_MAX));
        errors.extend(validate_phone(&self.father_contact, "Father's contact", false));
        errors.extend(validate_optional(&self.mother_name, "Mother's name", NAME_MAX));
        errors.extend(validate_phone(&self.mother_contact, "Mother's contact", false));
        errors.extend(validate_phone(&self.emergency_contact, "Emergency contact", true));
        errors
    }

    /// Church life: the third wizard step.
    pub fn validate_church_life(&self, today: NaiveDate) -> Vec<String> {
        let mut errors = vec![];
        errors.extend(validate_choice(&self.baptism_status, "Baptism status", BAPTISM_STATUSES));
        errors.extend(validate_past_date(&self.baptism_date, "Date of baptism", false, today));
        errors.extend(validate_choice(&self.ministry, "Ministry", MINISTRIES));
        errors.extend(validate_optional(&self.home_cell, "Home cell", TEXT_MAX));
        errors.extend(validate_optional(&self.bible_study_group, "Bible study group", TEXT_MAX));
        errors
    }

    /// Every rule of every step; used by the JSON API and the admin edit form.
    pub fn validate(&self, today: NaiveDate) -> Vec<String> {
        let mut errors = self.validate_personal(today);
        errors.extend(self.validate_address_family());
        errors.extend(self.validate_church_life(today));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn valid() -> MemberInput {
        MemberInput {
            title: "Sister".into(),
            first_name: "Ama".into(),
            last_name: "Mensah".into(),
            gender: "Female".into(),
            dob: "1994-03-12".into(),
            marital_status: "Married".into(),
            phone: "+233551234567".into(),
            hometown: "Kumasi".into(),
            region: "Ashanti".into(),
            residence: "Achimota".into(),
            emergency_contact: "+233201112223".into(),
            baptism_status: "Baptized".into(),
            ministry: "Women's Ministry".into(),
            ..MemberInput::default()
        }
    }

    #[test]
    fn complete_input_passes() {
        assert!(valid().validate(today()).is_empty());
    }

    #[test]
    fn empty_input_reports_each_required_field() {
        let errors = MemberInput::default().validate(today());
        assert!(errors.iter().any(|e| e == "First name is required"));
        assert!(errors.iter().any(|e| e == "Phone number is required"));
        assert!(errors.iter().any(|e| e == "Emergency contact is required"));
        assert!(errors.iter().any(|e| e == "Ministry is required"));
    }

    #[test]
    fn normalized_trims_text_fields() {
        let input = MemberInput {
            first_name: "  Kofi ".into(),
            email: " kofi@example.com".into(),
            ..valid()
        }
        .normalized();
        assert_eq!(input.first_name, "Kofi");
        assert_eq!(input.email, "kofi@example.com");
    }

    #[test]
    fn normalized_drops_baptism_date_when_not_baptized() {
        let input = MemberInput {
            baptism_status: " Not Baptized ".into(),
            baptism_date: "2010-08-01".into(),
            ..valid()
        }
        .normalized();
        assert_eq!(input.baptism_status, "Not Baptized");
        assert_eq!(input.baptism_date, "");

        let kept = MemberInput { baptism_date: "2010-08-01".into(), ..valid() }.normalized();
        assert_eq!(kept.baptism_date, "2010-08-01");
    }

    #[test]
    fn unknown_region_is_rejected() {
        let input = MemberInput { region: "Lagos".into(), ..valid() };
        assert_eq!(input.validate_address_family().len(), 1);
    }
}
