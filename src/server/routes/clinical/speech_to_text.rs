//! Speech-to-text endpoint

use crate::server::state::AppState;
use crate::server::types::SpeechToTextResponse;
use crate::utils::error::{GatewayError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use tracing::{debug, info, warn};

/// Multipart field carrying the recording
pub const AUDIO_FIELD: &str = "audio";

/// Caller-facing message for every processing failure
const FAILURE_MESSAGE: &str = "Speech-to-text processing failed";

/// Uploaded recording
struct Upload {
    data: Vec<u8>,
    filename: Option<String>,
}

/// Transcribe an uploaded recording and return the enhanced transcript
pub async fn speech_to_text(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    info!("Speech-to-text request");

    let max_bytes = state.config().pipeline().max_audio_bytes;
    let mut upload: Option<Upload> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("Error reading multipart field: {}", e);
            GatewayError::validation("Invalid multipart data")
        })?;

        if field.name() == Some(AUDIO_FIELD) && upload.is_none() {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);
            let data = read_field(&mut field, max_bytes).await?;
            upload = Some(Upload { data, filename });
        } else {
            // Drain fields we do not use
            while let Some(chunk) = field.next().await {
                chunk.map_err(|_| GatewayError::validation("Invalid multipart data"))?;
            }
        }
    }

    let upload = match upload {
        Some(upload) if !upload.data.is_empty() => upload,
        Some(_) => return Err(GatewayError::validation("Audio file is empty")),
        None => return Err(GatewayError::validation("No audio file provided")),
    };

    debug!(bytes = upload.data.len(), "Audio upload received");

    let transcription = state
        .pipeline
        .speech_to_text(&upload.data, upload.filename.as_deref())
        .await
        .map_err(|_| GatewayError::service(FAILURE_MESSAGE))?;

    Ok(HttpResponse::Ok().json(SpeechToTextResponse {
        success: true,
        transcription,
    }))
}

async fn read_field(field: &mut Field, max_bytes: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            warn!("Error reading audio chunk: {}", e);
            GatewayError::validation("Error reading audio file")
        })?;

        if data.len() + bytes.len() > max_bytes {
            return Err(GatewayError::validation(format!(
                "Audio file exceeds the {} byte limit",
                max_bytes
            )));
        }
        data.extend_from_slice(&bytes);
    }
    Ok(data)
}
