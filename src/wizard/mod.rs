//! The four-step registration wizard.
//!
//! Personal → Address & family → Church life → Review. Moving forward validates
//! the step being left; moving back keeps whatever was typed without checking it.
//! A visitor can only open steps up to the furthest one already reached, and the
//! final submit re-checks every step before a member row is written.

pub mod forms;
pub mod phone;
pub mod photo;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::member::MemberInput;

pub use self::forms::{AddressFamilyForm, ChurchLifeForm, PersonalForm, StepAction, StepForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Personal = 1,
    AddressFamily = 2,
    ChurchLife = 3,
    Review = 4,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Personal,
        WizardStep::AddressFamily,
        WizardStep::ChurchLife,
        WizardStep::Review,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    pub fn next(self) -> Self {
        match self {
            WizardStep::Personal => WizardStep::AddressFamily,
            WizardStep::AddressFamily => WizardStep::ChurchLife,
            WizardStep::ChurchLife | WizardStep::Review => WizardStep::Review,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WizardStep::Personal | WizardStep::AddressFamily => WizardStep::Personal,
            WizardStep::ChurchLife => WizardStep::AddressFamily,
            WizardStep::Review => WizardStep::ChurchLife,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Information",
            WizardStep::AddressFamily => "Address & Family",
            WizardStep::ChurchLife => "Church Life",
            WizardStep::Review => "Review Your Details",
        }
    }

    pub fn path(self) -> String {
        format!("/register/step/{}", self.number())
    }

    /// Errors that keep a visitor from leaving this step forwards.
    pub fn validate(self, input: &MemberInput, today: NaiveDate) -> Vec<String> {
        match self {
            WizardStep::Personal => input.validate_personal(today),
            WizardStep::AddressFamily => input.validate_address_family(),
            WizardStep::ChurchLife => input.validate_church_life(today),
            WizardStep::Review => vec![],
        }
    }
}

/// What the handler should show after a step was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Move to this step.
    Goto(WizardStep),
    /// Stay on the posted step and show these messages.
    Invalid(WizardStep, Vec<String>),
}

/// In-progress registration, stored server-side between steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub input: MemberInput,
    pub furthest: WizardStep,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            input: MemberInput {
                title: "Brother".to_string(),
                gender: "Male".to_string(),
                marital_status: "Single".to_string(),
                region: "Greater Accra".to_string(),
                baptism_status: "Baptized".to_string(),
                ministry: "Men's Ministry".to_string(),
                ..MemberInput::default()
            },
            furthest: WizardStep::Personal,
        }
    }
}

impl RegistrationDraft {
    /// Copy a posted step into the draft and decide where to go next.
    /// Entered data is kept in every case, including when validation fails.
    pub fn submit_step<F: StepForm>(&mut self, form: &F, today: NaiveDate) -> StepOutcome {
        form.apply_to(&mut self.input);
        let step = F::STEP;
        match form.action() {
            StepAction::Back => StepOutcome::Goto(step.prev()),
            StepAction::Next => {
                let errors = step.validate(&self.input, today);
                if !errors.is_empty() {
                    return StepOutcome::Invalid(step, errors);
                }
                let next = step.next();
                if next > self.furthest {
                    self.furthest = next;
                }
                StepOutcome::Goto(next)
            }
        }
    }

    pub fn can_visit(&self, step: WizardStep) -> bool {
        step <= self.furthest
    }

    /// The step a visitor lands on when asking for `step` out of order.
    pub fn clamp(&self, step: WizardStep) -> WizardStep {
        step.min(self.furthest)
    }

    /// First step whose data no longer validates, with its messages.
    pub fn first_invalid_step(&self, today: NaiveDate) -> Option<(WizardStep, Vec<String>)> {
        WizardStep::ALL.into_iter().find_map(|step| {
            let errors = step.validate(&self.input, today);
            (!errors.is_empty()).then_some((step, errors))
        })
    }

    /// Final check before the member row is written.
    pub fn finish(&self, today: NaiveDate) -> Result<MemberInput, (WizardStep, Vec<String>)> {
        match self.first_invalid_step(today) {
            Some(invalid) => Err(invalid),
            None => Ok(self.input.clone().normalized()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
    }

    #[test]
    fn next_and_prev_saturate() {
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::Personal.prev(), WizardStep::Personal);
        assert_eq!(WizardStep::ChurchLife.next(), WizardStep::Review);
    }

    #[test]
    fn fresh_draft_only_reaches_first_step() {
        let draft = RegistrationDraft::default();
        assert!(draft.can_visit(WizardStep::Personal));
        assert!(!draft.can_visit(WizardStep::AddressFamily));
        assert_eq!(draft.clamp(WizardStep::Review), WizardStep::Personal);
    }
}
