//! Narrative ("roast") generation.
//!
//! The text itself comes from an external model behind [`backend::AiBackend`].
//! This module builds the prompt, classifies the outcome, and substitutes a
//! local template whenever the model is unconfigured or fails, so a roast is
//! always produced.

pub mod backend;
pub mod prompt;

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use self::backend::{AiBackend, ChatMessage, ChatRequest};
use self::prompt::{build_roast_prompt, fallback_roast};
use crate::models::{CompatibilityRow, PlayerPerformance};

/// What the model call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeOutcome {
    Generated(String),
    Unconfigured,
    Failed(String),
}

/// Where the final text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeSource {
    Model,
    Fallback,
}

/// Final narrative text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub text: String,
    pub source: NarrativeSource,
}

#[derive(Clone)]
pub struct NarrativeGenerator {
    backend: Option<Arc<dyn AiBackend>>,
    max_tokens: u32,
}

impl NarrativeGenerator {
    /// `backend` of `None` means unconfigured.
    pub fn new(backend: Option<Arc<dyn AiBackend>>, max_tokens: u32) -> Self {
        Self {
            backend,
            max_tokens,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Send a prompt to the model, if there is one.
    pub async fn generate(&self, prompt: &str) -> NarrativeOutcome {
        let Some(backend) = &self.backend else {
            return NarrativeOutcome::Unconfigured;
        };

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(0.9)
            .with_max_tokens(self.max_tokens);

        match backend.chat(request).await {
            Ok(response) if !response.content.trim().is_empty() => {
                info!(backend = backend.name(), model = %response.model, "Narrative generated");
                NarrativeOutcome::Generated(response.content)
            }
            Ok(_) => NarrativeOutcome::Failed("empty response".to_string()),
            Err(e) => NarrativeOutcome::Failed(e.to_string()),
        }
    }

    /// Roast one performance. Falls back to the local template on any failure.
    pub async fn roast(&self, perf: &PlayerPerformance, rows: &[CompatibilityRow]) -> Narrative {
        let prompt = build_roast_prompt(perf, rows);

        match self.generate(&prompt).await {
            NarrativeOutcome::Generated(text) => Narrative {
                text,
                source: NarrativeSource::Model,
            },
            NarrativeOutcome::Unconfigured => {
                info!("Narrative backend unconfigured, using local roast");
                Narrative {
                    text: fallback_roast(perf),
                    source: NarrativeSource::Fallback,
                }
            }
            NarrativeOutcome::Failed(reason) => {
                warn!("Narrative generation failed ({}), using local roast", reason);
                Narrative {
                    text: fallback_roast(perf),
                    source: NarrativeSource::Fallback,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::backend::MockBackend;
    use super::prompt::tests::sample_performance;
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_falls_back() {
        let generator = NarrativeGenerator::new(None, 3000);
        assert_eq!(generator.generate("x").await, NarrativeOutcome::Unconfigured);

        let narrative = generator.roast(&sample_performance(), &[]).await;
        assert_eq!(narrative.source, NarrativeSource::Fallback);
        assert!(!narrative.text.is_empty());
        assert!(narrative.text.contains("5/0/3"));
    }

    #[tokio::test]
    async fn test_backend_error_falls_back() {
        let generator = NarrativeGenerator::new(Some(Arc::new(MockBackend::failing("403"))), 3000);

        let narrative = generator.roast(&sample_performance(), &[]).await;
        assert_eq!(narrative.source, NarrativeSource::Fallback);
        assert!(narrative.text.contains("5/0/3"));
    }

    #[tokio::test]
    async fn test_blank_response_falls_back() {
        let generator = NarrativeGenerator::new(Some(Arc::new(MockBackend::new("  \n"))), 3000);

        assert!(matches!(
            generator.generate("x").await,
            NarrativeOutcome::Failed(_)
        ));
        let narrative = generator.roast(&sample_performance(), &[]).await;
        assert_eq!(narrative.source, NarrativeSource::Fallback);
    }

    #[tokio::test]
    async fn test_model_text_is_used() {
        let generator =
            NarrativeGenerator::new(Some(Arc::new(MockBackend::new("A 3000-word burn"))), 3000);
        assert!(generator.is_configured());

        let narrative = generator.roast(&sample_performance(), &[]).await;
        assert_eq!(narrative.source, NarrativeSource::Model);
        assert_eq!(narrative.text, "A 3000-word burn");
    }
}
