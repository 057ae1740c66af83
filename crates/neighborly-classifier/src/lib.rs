//! Skill categorization: a zero-shot classification API client with a
//! deterministic keyword fallback.

pub mod analyzer;
pub mod client;
pub mod error;
pub mod keywords;

pub use client::{Classification, ClassifierConfig, ZeroShotClassifier};
pub use error::ClassifierError;
pub use keywords::categorize;
