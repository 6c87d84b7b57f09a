//! Pipeline stages
//!
//! Each stage wraps one provider call in its time budget. Only enhancement
//! swallows failures; the others return them to the pipeline.

mod enhancement;
mod synthesis;
mod transcription;
mod translation;

pub use enhancement::EnhancementStage;
pub use synthesis::SynthesisStage;
pub use transcription::TranscriptionStage;
pub use translation::TranslationStage;

use crate::core::providers::ProviderError;
use std::future::Future;
use std::time::Duration;

/// Run a provider call, failing with `ProviderError::Timeout` once `budget` elapses
pub(crate) async fn within_budget<T, F>(
    provider: &'static str,
    budget: Duration,
    call: F,
) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    tokio::time::timeout(budget, call).await.map_err(|_| {
        ProviderError::timeout(
            provider,
            format!("no response within {}s", budget.as_secs_f32()),
        )
    })?
}
