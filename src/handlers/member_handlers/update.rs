use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::models::member::{self, MemberInput};
use crate::templates_structs::{MemberFormTemplate, PageContext};
use crate::wizard::phone::compose_phone;

/// Every editable field of a member on one page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MemberEditForm {
    pub csrf_token: String,
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
    pub baptism_status: String,
    pub baptism_date: String,
    pub ministry: String,
    pub home_cell: String,
    pub bible_study_group: String,
    pub photo: String,
    pub remove_photo: Option<String>,
}

impl MemberEditForm {
    /// Build the new field values. An empty photo field keeps `current_photo`.
    /// `normalized()` drops the baptism date of members who are not baptized.
    pub fn to_input(&self, current_photo: &str) -> MemberInput {
        let photo = if self.remove_photo.is_some() {
            String::new()
        } else if self.photo.trim().is_empty() {
            current_photo.to_string()
        } else {
            self.photo.trim().to_string()
        };
        MemberInput {
            title: self.title.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            dob: self.dob.clone(),
            marital_status: self.marital_status.clone(),
            occupation: self.occupation.clone(),
            phone: compose_phone(&self.phone_code, &self.phone_number),
            email: self.email.clone(),
            hometown: self.hometown.clone(),
            region: self.region.clone(),
            residence: self.residence.clone(),
            gps_address: self.gps_address.trim().to_uppercase(),
            father_name: self.father_name.clone(),
            father_contact: compose_phone(&self.father_contact_code, &self.father_contact_number),
            mother_name: self.mother_name.clone(),
            mother_contact: compose_phone(&self.mother_contact_code, &self.mother_contact_number),
            emergency_contact: compose_phone(&self.emergency_contact_code, &self.emergency_contact_number),
            baptism_status: self.baptism_status.clone(),
            baptism_date: self.baptism_date.clone(),
            ministry: self.ministry.clone(),
            home_cell: self.home_cell.clone(),
            bible_study_group: self.bible_study_group.clone(),
            photo,
        }
        .normalized()
    }
}

pub async fn edit_form(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let found = member::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &config, "/members")?;
    render(MemberFormTemplate::new(ctx, id, found.full_name(), found.to_input(), vec![]))
}

pub async fn update(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<MemberEditForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let existing = member::find_by_id(&pool, id).await?.ok_or(AppError::NotFound)?;

    let input = form.to_input(&existing.photo);
    let errors = input.validate(Local::now().date_naive());
    if !errors.is_empty() {
        let ctx = PageContext::build(&session, &config, "/members")?;
        return render(MemberFormTemplate::new(ctx, id, existing.full_name(), input, errors));
    }

    if !member::update(&pool, id, &input).await? {
        return Err(AppError::NotFound);
    }
    log::info!("Member #{id} updated");
    set_flash(&session, "Member updated successfully");
    Ok(see_other(&format!("/members/{id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_photo_keeps_current_one() {
        let form = MemberEditForm { first_name: " Ama ".into(), ..Default::default() };
        let input = form.to_input("data:image/png;base64,AAAA");
        assert_eq!(input.photo, "data:image/png;base64,AAAA");
        assert_eq!(input.first_name, "Ama");
    }

    #[test]
    fn remove_photo_clears_it() {
        let form = MemberEditForm { remove_photo: Some("on".into()), ..Default::default() };
        assert_eq!(form.to_input("data:image/png;base64,AAAA").photo, "");
    }

    #[test]
    fn phone_parts_are_joined() {
        let form = MemberEditForm {
            phone_code: "+233".into(),
            phone_number: "024 123 4567".into(),
            baptism_status: "Not Baptized".into(),
            baptism_date: "2001-01-01".into(),
            ..Default::default()
        };
        let input = form.to_input("");
        assert_eq!(input.phone, "+2330241234567");
        assert_eq!(input.baptism_date, "");
    }
}
