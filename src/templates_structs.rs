// Template context structures for Askama templates, organized by area.
// All types are re-exported: `use congregation::templates_structs::*`

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_admin_email, take_flash};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::member::options::COUNTRY_CODES;
use crate::wizard::phone::split_phone;

/// Common context shared by all admin pages.
/// Templates access these as `ctx.admin_email`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub admin_email: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, current_path: &str) -> Result<Self, AppError> {
        let admin_email = get_admin_email(session)?;
        let avatar_initial = admin_email.chars().next().unwrap_or('?').to_uppercase().to_string();
        Ok(Self {
            admin_email,
            avatar_initial,
            flash: take_flash(session),
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        })
    }

    pub fn is_active(&self, prefix: &str) -> bool {
        self.current_path.starts_with(prefix)
    }
}

/// Context for pages anyone can open (landing, wizard, login).
pub struct PublicContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PublicContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
        }
    }
}

/// One `<option>` of a select box.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub fn select_options(values: &[&str], current: &str) -> Vec<SelectOption> {
    values
        .iter()
        .map(|v| SelectOption {
            value: v.to_string(),
            label: v.to_string(),
            selected: *v == current,
        })
        .collect()
}

/// Country code select + number input pair.
pub struct PhoneField {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub codes: Vec<SelectOption>,
    pub number: String,
}

impl PhoneField {
    pub fn new(name: &str, label: &str, stored: &str, required: bool) -> Self {
        let (code, number) = split_phone(stored);
        let codes = COUNTRY_CODES
            .iter()
            .map(|c| SelectOption {
                value: c.code.to_string(),
                label: format!("{} {}", c.country, c.code),
                selected: c.code == code,
            })
            .collect();
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required,
            codes,
            number,
        }
    }
}

mod api;
mod common;
mod dashboard;
mod member;
mod registration;

pub use self::api::{ApiErrorResponse, ApiSuccess, LoginRequest};
pub use self::common::{HomeTemplate, LoginTemplate};
pub use self::dashboard::DashboardTemplate;
pub use self::member::{
    DetailRow, DetailSection, MemberDetailTemplate, MemberFormTemplate, MemberListTemplate, StatusTab,
    member_sections,
};
pub use self::registration::{
    AddressStepTemplate, ChurchStepTemplate, DoneTemplate, PersonalStepTemplate, ReviewTemplate,
    StepIndicator, step_indicators,
};
