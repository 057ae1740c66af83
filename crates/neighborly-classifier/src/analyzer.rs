use neighborly_types::api::AnalyzeSkillResponse;
use tracing::{debug, info, warn};

use crate::client::ZeroShotClassifier;
use crate::error::ClassifierError;
use crate::keywords::categorize;

/// Confidence reported for keyword fallback results.
pub const FALLBACK_SCORE: f64 = 0.9;

pub const NOTE_NO_TOKEN: &str = "Using fallback - NO TOKEN";
pub const NOTE_UNEXPECTED_FORMAT: &str = "Unexpected format, using fallback";
pub const NOTE_API_ERROR: &str = "Using fallback due to API error";

const ERROR_BODY_LOG_CHARS: usize = 512;

impl ZeroShotClassifier {
    /// Rank categories for a skill description. Never fails: any classifier
    /// error is logged and replaced by the keyword result.
    pub async fn analyze(&self, text: &str) -> AnalyzeSkillResponse {
        info!("Analyzing skill text ({} chars)", text.chars().count());

        match self.classify(text).await {
            Ok(classification) => AnalyzeSkillResponse {
                labels: classification.labels,
                scores: classification.scores,
                note: None,
            },
            Err(err) => {
                if let ClassifierError::Status { body, .. } = &err {
                    let excerpt: String = body.chars().take(ERROR_BODY_LOG_CHARS).collect();
                    debug!("Classifier error body: {}", excerpt);
                }
                warn!("Skill classification failed, using keyword fallback: {}", err);
                fallback_response(text, fallback_note(&err))
            }
        }
    }
}

fn fallback_note(err: &ClassifierError) -> &'static str {
    match err {
        ClassifierError::MissingToken => NOTE_NO_TOKEN,
        ClassifierError::UnexpectedShape(_) => NOTE_UNEXPECTED_FORMAT,
        ClassifierError::Transport(_)
        | ClassifierError::Status { .. }
        | ClassifierError::InvalidJson(_) => NOTE_API_ERROR,
    }
}

pub fn fallback_response(text: &str, note: &str) -> AnalyzeSkillResponse {
    AnalyzeSkillResponse {
        labels: vec![categorize(text).to_string()],
        scores: vec![FALLBACK_SCORE],
        note: Some(note.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClassifierConfig;
    use crate::client::tests::{TEST_TOKEN, classifier_for, spawn_fake, spawn_slow};
    use axum::http::StatusCode;
    use std::time::Duration;

    #[tokio::test]
    async fn no_token_uses_keywords() {
        let classifier = classifier_for("http://127.0.0.1:9/unused".into(), None);

        let response = classifier.analyze("I can fix your sink").await;
        assert_eq!(response.labels, vec!["repairs"]);
        assert_eq!(response.scores, vec![FALLBACK_SCORE]);
        assert_eq!(response.note.as_deref(), Some(NOTE_NO_TOKEN));
    }

    #[tokio::test]
    async fn empty_text_falls_back_to_general() {
        let classifier = classifier_for("http://127.0.0.1:9/unused".into(), None);
        assert_eq!(classifier.analyze("").await.top_label(), Some("general"));
    }

    #[tokio::test]
    async fn api_result_passes_through_without_note() {
        let url = spawn_fake(
            StatusCode::OK,
            r#"{"labels":["music","art"],"scores":[0.7,0.3]}"#,
        )
        .await;
        let classifier = classifier_for(url, Some(TEST_TOKEN));

        let response = classifier.analyze("I play guitar").await;
        assert_eq!(response.labels, vec!["music", "art"]);
        assert_eq!(response.scores, vec![0.7, 0.3]);
        assert!(response.note.is_none());
    }

    #[tokio::test]
    async fn error_status_uses_api_error_note() {
        let url = spawn_fake(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let classifier = classifier_for(url, Some(TEST_TOKEN));

        let response = classifier.analyze("walk the dog").await;
        assert_eq!(response.labels, vec!["pet care"]);
        assert_eq!(response.note.as_deref(), Some(NOTE_API_ERROR));
    }

    #[tokio::test]
    async fn unparsable_body_uses_api_error_note() {
        let url = spawn_fake(StatusCode::OK, "<html>oops</html>").await;
        let classifier = classifier_for(url, Some(TEST_TOKEN));

        let response = classifier.analyze("walk the dog").await;
        assert_eq!(response.note.as_deref(), Some(NOTE_API_ERROR));
    }

    #[tokio::test]
    async fn unknown_shape_uses_format_note() {
        let url = spawn_fake(StatusCode::OK, r#"{"error":"Model is loading"}"#).await;
        let classifier = classifier_for(url, Some(TEST_TOKEN));

        let response = classifier.analyze("garden and cook").await;
        assert_eq!(response.labels, vec!["gardening"]);
        assert_eq!(response.note.as_deref(), Some(NOTE_UNEXPECTED_FORMAT));
    }

    #[tokio::test]
    async fn timeout_uses_api_error_note() {
        let url = spawn_slow(Duration::from_secs(5)).await;
        let classifier = ZeroShotClassifier::new(ClassifierConfig {
            url,
            token: Some(TEST_TOKEN.into()),
            timeout: Duration::from_millis(300),
        })
        .unwrap();

        let response = classifier.analyze("piano lessons").await;
        assert_eq!(response.labels, vec!["music"]);
        assert_eq!(response.note.as_deref(), Some(NOTE_API_ERROR));
    }
}
