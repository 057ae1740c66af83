use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

// -- Skill analysis --

/// `text` may be missing or `null`; both read as empty text.
#[derive(Debug, Deserialize)]
pub struct AnalyzeSkillRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Ranked labels for a skill description. `note` is only present when the
/// keyword fallback produced the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeSkillResponse {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AnalyzeSkillResponse {
    /// Highest ranked label, if any.
    pub fn top_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

// -- Registration --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub skill: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub storage_key: String,
    pub profile: UserProfile,
}

// -- Errors --

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
