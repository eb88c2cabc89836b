//! Wizard flow at the model level: step forms, navigation, drafts and final submit.

mod common;

use congregation::models::{draft, member};
use congregation::wizard::{
    AddressFamilyForm, ChurchLifeForm, PersonalForm, RegistrationDraft, StepAction, StepOutcome, WizardStep,
};
use common::*;

fn personal() -> PersonalForm {
    PersonalForm {
        title: "Sister".into(),
        first_name: " Ama ".into(),
        last_name: "Mensah".into(),
        gender: "Female".into(),
        dob: "1994-03-12".into(),
        marital_status: "Married".into(),
        phone_code: "+233".into(),
        phone_number: "055 123 4567".into(),
        photo: TINY_PNG.into(),
        ..Default::default()
    }
}

fn address() -> AddressFamilyForm {
    AddressFamilyForm {
        hometown: "Kumasi".into(),
        region: "Ashanti".into(),
        residence: "Achimota".into(),
        gps_address: "ga-123-4567".into(),
        emergency_contact_code: "+233".into(),
        emergency_contact_number: "0201112223".into(),
        ..Default::default()
    }
}

fn church() -> ChurchLifeForm {
    ChurchLifeForm {
        baptism_status: "Baptized".into(),
        baptism_date: "2010-08-01".into(),
        ministry: "Women's Ministry".into(),
        ..Default::default()
    }
}

#[test]
fn test_full_walk_through() {
    let today = today();
    let mut d = RegistrationDraft::default();

    assert_eq!(d.submit_step(&personal(), today), StepOutcome::Goto(WizardStep::AddressFamily));
    assert_eq!(d.submit_step(&address(), today), StepOutcome::Goto(WizardStep::ChurchLife));
    assert_eq!(d.submit_step(&church(), today), StepOutcome::Goto(WizardStep::Review));
    assert_eq!(d.furthest, WizardStep::Review);

    let input = d.finish(today).expect("complete draft");
    assert_eq!(input.first_name, "Ama");
    assert_eq!(input.phone, "+2330551234567");
    assert_eq!(input.gps_address, "GA-123-4567");
    assert_eq!(input.photo, TINY_PNG);
}

#[test]
fn test_invalid_step_keeps_data_and_position() {
    let today = today();
    let mut d = RegistrationDraft::default();
    let form = PersonalForm { first_name: String::new(), ..personal() };

    match d.submit_step(&form, today) {
        StepOutcome::Invalid(step, errors) => {
            assert_eq!(step, WizardStep::Personal);
            assert!(errors.iter().any(|e| e == "First name is required"));
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
    assert_eq!(d.furthest, WizardStep::Personal);
    assert_eq!(d.input.last_name, "Mensah", "entered data is kept");
}

#[test]
fn test_back_skips_validation() {
    let today = today();
    let mut d = RegistrationDraft::default();
    d.submit_step(&personal(), today);

    let half_done = AddressFamilyForm { hometown: "Ho".into(), action: StepAction::Back, ..Default::default() };
    assert_eq!(d.submit_step(&half_done, today), StepOutcome::Goto(WizardStep::Personal));
    assert_eq!(d.input.hometown, "Ho");
    assert_eq!(d.furthest, WizardStep::AddressFamily);
}

#[test]
fn test_steps_beyond_furthest_are_clamped() {
    let mut d = RegistrationDraft::default();
    d.submit_step(&personal(), today());

    assert!(d.can_visit(WizardStep::AddressFamily));
    assert!(!d.can_visit(WizardStep::ChurchLife));
    assert_eq!(d.clamp(WizardStep::Review), WizardStep::AddressFamily);
    assert_eq!(d.clamp(WizardStep::Personal), WizardStep::Personal);
}

#[test]
fn test_finish_reports_first_broken_step() {
    let today = today();
    let mut d = RegistrationDraft::default();
    d.submit_step(&personal(), today);
    d.submit_step(&address(), today);
    d.submit_step(&church(), today);

    // Data edited behind the wizard's back, e.g. a stale draft.
    d.input.emergency_contact.clear();
    let (step, errors) = d.finish(today).expect_err("broken draft");
    assert_eq!(step, WizardStep::AddressFamily);
    assert_eq!(errors, vec!["Emergency contact is required".to_string()]);
}

#[test]
fn test_not_baptized_clears_date_and_remove_photo() {
    let today = today();
    let mut d = RegistrationDraft::default();
    d.submit_step(&personal(), today);
    assert!(!d.input.photo.is_empty());

    let no_photo = PersonalForm { photo: String::new(), remove_photo: Some("on".into()), ..personal() };
    d.submit_step(&no_photo, today);
    assert!(d.input.photo.is_empty());

    let keep = PersonalForm { photo: String::new(), ..personal() };
    d.input.photo = TINY_PNG.into();
    d.submit_step(&keep, today);
    assert_eq!(d.input.photo, TINY_PNG, "an empty upload keeps the stored photo");

    let not_baptized = ChurchLifeForm { baptism_status: "Not Baptized".into(), ..church() };
    d.submit_step(&not_baptized, today);
    assert!(d.input.baptism_date.is_empty());
}

#[tokio::test]
async fn test_draft_save_load_delete() {
    let db = setup_test_db().await;
    let pool = db.pool();

    let mut d = RegistrationDraft::default();
    d.submit_step(&personal(), today());
    draft::save(pool, "tok-1", &d).await.expect("save");

    let loaded = draft::load(pool, "tok-1").await.expect("load").expect("missing");
    assert_eq!(loaded, d);

    d.submit_step(&address(), today());
    draft::save(pool, "tok-1", &d).await.expect("save again");
    let loaded = draft::load(pool, "tok-1").await.expect("load").expect("missing");
    assert_eq!(loaded.furthest, WizardStep::ChurchLife);

    draft::delete(pool, "tok-1").await.expect("delete");
    assert!(draft::load(pool, "tok-1").await.expect("load").is_none());
}

#[tokio::test]
async fn test_unreadable_draft_is_ignored() {
    let db = setup_test_db().await;
    let pool = db.pool();

    sqlx::query("INSERT INTO registration_drafts (token, data) VALUES ('bad', 'not json')")
        .execute(pool)
        .await
        .expect("insert");
    assert!(draft::load(pool, "bad").await.expect("load").is_none());
}

#[tokio::test]
async fn test_cleanup_removes_stale_drafts() {
    let db = setup_test_db().await;
    let pool = db.pool();

    draft::save(pool, "fresh", &RegistrationDraft::default()).await.expect("save");
    draft::save(pool, "stale", &RegistrationDraft::default()).await.expect("save");
    sqlx::query(
        "UPDATE registration_drafts SET updated_at = strftime('%Y-%m-%d %H:%M:%S', 'now', '-5 days') \
         WHERE token = 'stale'",
    )
    .execute(pool)
    .await
    .expect("age draft");

    let removed = draft::cleanup_older_than(pool, 72).await.expect("cleanup");
    assert_eq!(removed, 1);
    assert!(draft::load(pool, "fresh").await.expect("load").is_some());
    assert!(draft::load(pool, "stale").await.expect("load").is_none());
}

#[tokio::test]
async fn test_finished_draft_becomes_pending_member() {
    let db = setup_test_db().await;
    let pool = db.pool();
    let today = today();

    let mut d = RegistrationDraft::default();
    d.submit_step(&personal(), today);
    d.submit_step(&address(), today);
    d.submit_step(&church(), today);

    let id = member::create(pool, &d.finish(today).expect("complete")).await.expect("create");
    let stored = member::find_by_id(pool, id).await.expect("query").expect("missing");
    assert!(stored.is_pending());
    assert_eq!(stored.full_name(), "Ama Mensah");
}
