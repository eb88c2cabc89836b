use actix_session::Session;

use crate::errors::AppError;

const ADMIN_ID: &str = "admin_id";
const ADMIN_EMAIL: &str = "admin_email";
const FLASH: &str = "flash";
const DRAFT_TOKEN: &str = "draft_token";

pub fn get_admin_id(session: &Session) -> Option<i64> {
    session.get::<i64>(ADMIN_ID).unwrap_or(None)
}

pub fn get_admin_email(session: &Session) -> Result<String, AppError> {
    match session.get::<String>(ADMIN_EMAIL) {
        Ok(Some(email)) => Ok(email),
        Ok(None) => Err(AppError::Session("No admin email in session".to_string())),
        Err(e) => Err(AppError::Session(format!("Session error: {e}"))),
    }
}

/// Mark the session as authenticated. The session id is renewed to avoid fixation.
pub fn sign_in(session: &Session, admin_id: i64, email: &str) -> Result<(), AppError> {
    session.renew();
    session
        .insert(ADMIN_ID, admin_id)
        .and_then(|_| session.insert(ADMIN_EMAIL, email))
        .map_err(|e| AppError::Session(format!("Failed to store login: {e}")))
}

pub fn sign_out(session: &Session) {
    session.remove(ADMIN_ID);
    session.remove(ADMIN_EMAIL);
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH);
    }
    flash
}

pub fn get_draft_token(session: &Session) -> Option<String> {
    session.get::<String>(DRAFT_TOKEN).unwrap_or(None)
}

pub fn set_draft_token(session: &Session, token: &str) -> Result<(), AppError> {
    session
        .insert(DRAFT_TOKEN, token)
        .map_err(|e| AppError::Session(format!("Failed to store draft token: {e}")))
}

pub fn clear_draft_token(session: &Session) {
    session.remove(DRAFT_TOKEN);
}
