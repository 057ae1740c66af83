use axum::{Json, extract::State};

use neighborly_types::api::{AnalyzeSkillRequest, AnalyzeSkillResponse};

use crate::state::AppState;

/// POST /api/analyze-skill — always answers 200; classifier failures come
/// back as a keyword result with a `note`.
pub async fn analyze_skill(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeSkillRequest>,
) -> Json<AnalyzeSkillResponse> {
    let text = req.text.unwrap_or_default();
    Json(state.classifier.analyze(&text).await)
}
