use crate::core::pipeline::prompts::enhancement_messages;
use crate::core::traits::ChatProvider;
use crate::utils::logging::Sanitization;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::within_budget;

/// Terminology correction of a transcript.
///
/// Best effort: any failure, timeout or empty reply yields the input text.
#[derive(Clone)]
pub struct EnhancementStage {
    provider: Arc<dyn ChatProvider>,
    budget: Duration,
}

impl EnhancementStage {
    pub fn new(provider: Arc<dyn ChatProvider>, budget: Duration) -> Self {
        Self { provider, budget }
    }

    pub async fn enhance(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let result = within_budget(
            self.provider.name(),
            self.budget,
            self.provider.complete(enhancement_messages(text)),
        )
        .await;

        match result {
            Ok(enhanced) if !enhanced.trim().is_empty() => {
                debug!("Transcript enhanced");
                enhanced
            }
            Ok(_) => {
                warn!("Medical term enhancement returned no text, keeping transcript");
                text.to_string()
            }
            Err(e) => {
                warn!(
                    error = %Sanitization::sanitize_for_log(&e.to_string()),
                    "Medical term enhancement error, keeping transcript"
                );
                text.to_string()
            }
        }
    }
}
