use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

use neighborly_types::api::{RegisterRequest, RegisterResponse};
use neighborly_types::models::{Category, PROFILE_STORAGE_KEY, UserProfile};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/register — build the profile the client keeps in local storage.
/// Nothing is stored server-side.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = req.name.trim();
    let address = req.address.trim();
    let skill = req.skill.trim();

    if name.is_empty() || address.is_empty() || skill.is_empty() {
        return Err(ApiError::BadRequest("Please fill in all fields".into()));
    }

    let analysis = state.classifier.analyze(skill).await;
    let ai_category = analysis
        .top_label()
        .unwrap_or(Category::General.as_str())
        .to_string();

    info!("Registered neighbor with skill category '{}'", ai_category);

    let profile = UserProfile::new(
        name.to_string(),
        address.to_string(),
        skill.to_string(),
        ai_category,
        chrono::Utc::now().date_naive(),
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            storage_key: PROFILE_STORAGE_KEY.to_string(),
            profile,
        }),
    ))
}
