//! Translation endpoint

use crate::core::pipeline::TranslationRequest;
use crate::server::state::AppState;
use crate::server::types::TranslateResponse;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use tracing::info;

const FAILURE_MESSAGE: &str = "Translation failed";

/// Translate text, voice it and return a gated link to the audio
pub async fn translate(
    state: web::Data<AppState>,
    form: web::Form<TranslationRequest>,
) -> Result<HttpResponse> {
    let request = form.into_inner();
    validate(&request)?;

    info!(
        source_lang = request.source_lang.as_str(),
        target_lang = request.target_lang.as_str(),
        "Translation request"
    );

    let outcome = state
        .pipeline
        .translate(&request)
        .await
        .map_err(|_| GatewayError::service(FAILURE_MESSAGE))?;

    Ok(HttpResponse::Ok().json(TranslateResponse {
        success: true,
        translated_text: outcome.translated_text,
        audio_path: outcome.audio.url(),
        audio_id: outcome.audio.id.to_string(),
    }))
}

fn validate(request: &TranslationRequest) -> Result<()> {
    if request.text.trim().is_empty() {
        return Err(GatewayError::validation("text cannot be empty"));
    }
    if request.source_lang.trim().is_empty() || request.target_lang.trim().is_empty() {
        return Err(GatewayError::validation(
            "source_lang and target_lang are required",
        ));
    }
    Ok(())
}
