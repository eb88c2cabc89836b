use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;

use crate::auth::csrf;
use crate::auth::session::{clear_draft_token, get_draft_token, set_draft_token, set_flash};
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::handlers::{CsrfOnly, see_other};
use crate::models::{draft, member};
use crate::templates_structs::{
    AddressStepTemplate, ChurchStepTemplate, DoneTemplate, PersonalStepTemplate, PublicContext,
    ReviewTemplate,
};
use crate::wizard::{
    AddressFamilyForm, ChurchLifeForm, PersonalForm, RegistrationDraft, StepForm, StepOutcome, WizardStep,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The visitor's draft, or a fresh one under a new token (not stored until the first post).
async fn load_draft(pool: &DbPool, session: &Session) -> Result<(String, RegistrationDraft), AppError> {
    if let Some(token) = get_draft_token(session) {
        if let Some(found) = draft::load(pool, &token).await? {
            return Ok((token, found));
        }
    }
    Ok((csrf::generate_token(), RegistrationDraft::default()))
}

fn render_step(
    session: &Session,
    config: &AppConfig,
    draft: &RegistrationDraft,
    step: WizardStep,
    errors: Vec<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PublicContext::build(session, config);
    match step {
        WizardStep::Personal => render(PersonalStepTemplate::new(ctx, draft, errors)),
        WizardStep::AddressFamily => render(AddressStepTemplate::new(ctx, draft, errors)),
        WizardStep::ChurchLife => render(ChurchStepTemplate::new(ctx, draft, errors)),
        WizardStep::Review => render(ReviewTemplate::new(ctx, draft, errors)),
    }
}

/// Decode a posted step, check its CSRF token and feed it to the draft.
fn submit_form<F: StepForm + DeserializeOwned>(
    session: &Session,
    draft: &mut RegistrationDraft,
    body: &[u8],
    today: NaiveDate,
) -> Result<StepOutcome, AppError> {
    let form: F = serde_urlencoded::from_bytes(body)
        .map_err(|e| AppError::BadRequest(format!("Malformed form data: {e}")))?;
    csrf::validate_csrf(session, form.csrf_token())?;
    Ok(draft.submit_step(&form, today))
}

pub async fn start() -> HttpResponse {
    see_other(&WizardStep::Personal.path())
}

pub async fn step_page(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<u8>,
) -> Result<HttpResponse, AppError> {
    let step = WizardStep::from_number(path.into_inner()).ok_or(AppError::NotFound)?;
    let (_, draft) = load_draft(&pool, &session).await?;

    let allowed = draft.clamp(step);
    if allowed != step {
        return Ok(see_other(&allowed.path()));
    }
    render_step(&session, &config, &draft, step, vec![])
}

pub async fn step_submit(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<u8>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let step = WizardStep::from_number(path.into_inner()).ok_or(AppError::NotFound)?;
    let (token, mut draft) = load_draft(&pool, &session).await?;

    if !draft.can_visit(step) {
        return Ok(see_other(&draft.clamp(step).path()));
    }

    let today = today();
    let outcome = match step {
        WizardStep::Personal => submit_form::<PersonalForm>(&session, &mut draft, &body, today)?,
        WizardStep::AddressFamily => submit_form::<AddressFamilyForm>(&session, &mut draft, &body, today)?,
        WizardStep::ChurchLife => submit_form::<ChurchLifeForm>(&session, &mut draft, &body, today)?,
        // The review page posts to /register/submit.
        WizardStep::Review => return Ok(see_other(&step.path())),
    };

    draft::save(&pool, &token, &draft).await?;
    set_draft_token(&session, &token)?;

    match outcome {
        StepOutcome::Goto(next) => Ok(see_other(&next.path())),
        StepOutcome::Invalid(step, errors) => render_step(&session, &config, &draft, step, errors),
    }
}

pub async fn submit(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let Some(token) = get_draft_token(&session) else {
        return Ok(see_other(&WizardStep::Personal.path()));
    };
    let Some(draft) = draft::load(&pool, &token).await? else {
        clear_draft_token(&session);
        return Ok(see_other(&WizardStep::Personal.path()));
    };
    if !draft.can_visit(WizardStep::Review) {
        return Ok(see_other(&draft.clamp(WizardStep::Review).path()));
    }

    let input = match draft.finish(today()) {
        Ok(input) => input,
        Err((step, errors)) => return render_step(&session, &config, &draft, step, errors),
    };

    let id = member::create(&pool, &input).await?;
    log::info!("New registration #{id} for {} {}", input.first_name, input.last_name);

    draft::delete(&pool, &token).await?;
    clear_draft_token(&session);
    set_flash(
        &session,
        &format!(
            "Thank you, {}! Your registration has been received and is awaiting review.",
            input.first_name
        ),
    );
    Ok(see_other("/register/done"))
}

pub async fn reset(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    if let Some(token) = get_draft_token(&session) {
        draft::delete(&pool, &token).await?;
    }
    clear_draft_token(&session);
    Ok(see_other(&WizardStep::Personal.path()))
}

pub async fn done(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PublicContext::build(&session, &config);
    render(DoneTemplate { ctx })
}
