use serde::{Deserialize, Serialize};

/// `{ "success": true }`, optionally with the id of a created row.
#[derive(Serialize, Debug, Clone)]
pub struct ApiSuccess {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ApiSuccess {
    pub fn ok() -> Self {
        Self { success: true, id: None }
    }

    pub fn created(id: i64) -> Self {
        Self { success: true, id: Some(id) }
    }
}

/// Error body returned by every JSON endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: &str) -> Self {
        Self { error: error.to_string(), details: None }
    }

    pub fn validation(errors: &[String]) -> Self {
        Self {
            error: "Validation failed".to_string(),
            details: Some(errors.join("; ")),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
