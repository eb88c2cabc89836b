use askama::Template;

use crate::models::member::MemberInput;
use crate::models::member::options::{BAPTISM_STATUSES, GENDERS, MARITAL_STATUSES, MINISTRIES, REGIONS, TITLES};
use crate::wizard::{RegistrationDraft, WizardStep};
use super::{DetailSection, PhoneField, PublicContext, SelectOption, member_sections, select_options};

/// One circle of the progress bar above the wizard.
pub struct StepIndicator {
    pub number: u8,
    pub title: String,
    pub state: &'static str,
    pub link: Option<String>,
}

pub fn step_indicators(draft: &RegistrationDraft, current: WizardStep) -> Vec<StepIndicator> {
    WizardStep::ALL
        .into_iter()
        .map(|step| StepIndicator {
            number: step.number(),
            title: step.title().to_string(),
            state: if step == current {
                "current"
            } else if step < current || draft.can_visit(step) {
                "done"
            } else {
                "todo"
            },
            link: (step != current && draft.can_visit(step)).then(|| step.path()),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "register/personal.html")]
pub struct PersonalStepTemplate {
    pub ctx: PublicContext,
    pub steps: Vec<StepIndicator>,
    pub errors: Vec<String>,
    pub input: MemberInput,
    pub titles: Vec<SelectOption>,
    pub genders: Vec<SelectOption>,
    pub marital_statuses: Vec<SelectOption>,
    pub phone: PhoneField,
}

impl PersonalStepTemplate {
    pub fn new(ctx: PublicContext, draft: &RegistrationDraft, errors: Vec<String>) -> Self {
        let input = &draft.input;
        Self {
            steps: step_indicators(draft, WizardStep::Personal),
            titles: select_options(TITLES, &input.title),
            genders: select_options(GENDERS, &input.gender),
            marital_statuses: select_options(MARITAL_STATUSES, &input.marital_status),
            phone: PhoneField::new("phone", "Phone Number", &input.phone, true),
            input: input.clone(),
            ctx,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "register/address.html")]
pub struct AddressStepTemplate {
    pub ctx: PublicContext,
    pub steps: Vec<StepIndicator>,
    pub errors: Vec<String>,
    pub input: MemberInput,
    pub regions: Vec<SelectOption>,
    pub father_contact: PhoneField,
    pub mother_contact: PhoneField,
    pub emergency_contact: PhoneField,
}

impl AddressStepTemplate {
    pub fn new(ctx: PublicContext, draft: &RegistrationDraft, errors: Vec<String>) -> Self {
        let input = &draft.input;
        Self {
            steps: step_indicators(draft, WizardStep::AddressFamily),
            regions: select_options(REGIONS, &input.region),
            father_contact: PhoneField::new("father_contact", "Father's Contact", &input.father_contact, false),
            mother_contact: PhoneField::new("mother_contact", "Mother's Contact", &input.mother_contact, false),
            emergency_contact: PhoneField::new(
                "emergency_contact",
                "Emergency Contact Number",
                &input.emergency_contact,
                true,
            ),
            input: input.clone(),
            ctx,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "register/church.html")]
pub struct ChurchStepTemplate {
    pub ctx: PublicContext,
    pub steps: Vec<StepIndicator>,
    pub errors: Vec<String>,
    pub input: MemberInput,
    pub baptism_statuses: Vec<SelectOption>,
    pub ministries: Vec<SelectOption>,
}

impl ChurchStepTemplate {
    pub fn new(ctx: PublicContext, draft: &RegistrationDraft, errors: Vec<String>) -> Self {
        let input = &draft.input;
        Self {
            steps: step_indicators(draft, WizardStep::ChurchLife),
            baptism_statuses: select_options(BAPTISM_STATUSES, &input.baptism_status),
            ministries: select_options(MINISTRIES, &input.ministry),
            input: input.clone(),
            ctx,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "register/review.html")]
pub struct ReviewTemplate {
    pub ctx: PublicContext,
    pub steps: Vec<StepIndicator>,
    pub errors: Vec<String>,
    pub photo: String,
    pub full_name: String,
    pub sections: Vec<DetailSection>,
}

impl ReviewTemplate {
    pub fn new(ctx: PublicContext, draft: &RegistrationDraft, errors: Vec<String>) -> Self {
        let input = &draft.input;
        Self {
            steps: step_indicators(draft, WizardStep::Review),
            photo: input.photo.clone(),
            full_name: format!("{} {} {}", input.title, input.first_name, input.last_name)
                .trim()
                .to_string(),
            sections: member_sections(input, true),
            ctx,
            errors,
        }
    }
}

#[derive(Template)]
#[template(path = "register/done.html")]
pub struct DoneTemplate {
    pub ctx: PublicContext,
}
