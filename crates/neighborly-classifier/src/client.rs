use std::time::Duration;

use neighborly_types::models::Category;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClassifierError, Result};

pub const DEFAULT_API_URL: &str =
    "https://router.huggingface.co/hf-inference/models/facebook/bart-large-mnli";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub url: String,
    /// Bearer token. `None` puts the classifier in keyword-only mode.
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Labels ranked by score, as returned by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

// ── Wire types ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters,
}

#[derive(Debug, Serialize)]
struct ClassifyParameters {
    candidate_labels: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// The inference router answers either with a list of `{label, score}` pairs
/// or with parallel `labels`/`scores` arrays, depending on the deployment.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Ranked(Vec<LabelScore>),
    Columns { labels: Vec<String>, scores: Vec<f64> },
}

/// Parse a classifier response body into a single shape.
pub fn normalize(body: &str) -> Result<Classification> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let raw: RawResponse = serde_json::from_value(value)
        .map_err(|e| ClassifierError::UnexpectedShape(e.to_string()))?;

    match raw {
        RawResponse::Ranked(pairs) if !pairs.is_empty() => {
            let (labels, scores) = pairs.into_iter().map(|p| (p.label, p.score)).unzip();
            Ok(Classification { labels, scores })
        }
        RawResponse::Columns { labels, scores }
            if !labels.is_empty() && labels.len() == scores.len() =>
        {
            Ok(Classification { labels, scores })
        }
        RawResponse::Ranked(_) => Err(ClassifierError::UnexpectedShape("empty label list".into())),
        RawResponse::Columns { labels, scores } => Err(ClassifierError::UnexpectedShape(format!(
            "{} labels with {} scores",
            labels.len(),
            scores.len()
        ))),
    }
}

// ── Client ──────────────────────────────────────────────────────────────

/// Client for a zero-shot text classification endpoint.
#[derive(Clone)]
pub struct ZeroShotClassifier {
    http: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl ZeroShotClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let token = config.token.filter(|t| !t.trim().is_empty());

        Ok(Self {
            http,
            url: config.url,
            token,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Classify `text` against the fixed category labels.
    pub async fn classify(&self, text: &str) -> Result<Classification> {
        let token = self.token.as_deref().ok_or(ClassifierError::MissingToken)?;

        let request = ClassifyRequest {
            inputs: text,
            parameters: ClassifyParameters {
                candidate_labels: Category::ALL.iter().map(|c| c.as_str()).collect(),
            },
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Classifier responded {} with {} bytes", status, body.len());

        if !status.is_success() {
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        normalize(&body)
    }
}
