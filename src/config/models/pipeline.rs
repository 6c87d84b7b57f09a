//! Pipeline configuration

use super::default_max_audio_bytes;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Per-stage time budgets
    #[serde(default)]
    pub timeouts: StageTimeouts,
    /// Largest accepted audio upload in bytes
    #[serde(default = "default_max_audio_bytes")]
    pub max_audio_bytes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeouts: StageTimeouts::default(),
            max_audio_bytes: default_max_audio_bytes(),
        }
    }
}

/// Time budget of each provider stage, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimeouts {
    #[serde(default = "default_transcription_secs")]
    pub transcription_secs: u64,
    #[serde(default = "default_enhancement_secs")]
    pub enhancement_secs: u64,
    #[serde(default = "default_translation_secs")]
    pub translation_secs: u64,
    #[serde(default = "default_synthesis_secs")]
    pub synthesis_secs: u64,
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self {
            transcription_secs: default_transcription_secs(),
            enhancement_secs: default_enhancement_secs(),
            translation_secs: default_translation_secs(),
            synthesis_secs: default_synthesis_secs(),
        }
    }
}

impl StageTimeouts {
    pub fn transcription(&self) -> Duration {
        Duration::from_secs(self.transcription_secs)
    }

    pub fn enhancement(&self) -> Duration {
        Duration::from_secs(self.enhancement_secs)
    }

    pub fn translation(&self) -> Duration {
        Duration::from_secs(self.translation_secs)
    }

    pub fn synthesis(&self) -> Duration {
        Duration::from_secs(self.synthesis_secs)
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), String> {
        let t = &self.timeouts;
        for (name, secs) in [
            ("transcription", t.transcription_secs),
            ("enhancement", t.enhancement_secs),
            ("translation", t.translation_secs),
            ("synthesis", t.synthesis_secs),
        ] {
            if secs == 0 {
                return Err(format!("pipeline.timeouts.{}_secs must be greater than 0", name));
            }
        }

        if self.max_audio_bytes == 0 {
            return Err("pipeline.max_audio_bytes must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_transcription_secs() -> u64 {
    60
}

fn default_enhancement_secs() -> u64 {
    30
}

fn default_translation_secs() -> u64 {
    30
}

fn default_synthesis_secs() -> u64 {
    60
}
