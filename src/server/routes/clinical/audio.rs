//! Sealed audio retrieval

use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Decrypt and return the audio produced by an earlier translation
pub async fn get_audio(state: web::Data<AppState>, id: web::Path<String>) -> Result<HttpResponse> {
    let id = id.into_inner();
    debug!(audio_id = id.as_str(), "Audio retrieval request");

    let audio = state.pipeline.fetch_audio(&id).await?;

    Ok(HttpResponse::Ok()
        .content_type("audio/mpeg")
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .body(audio))
}
