//! Clinical endpoints
//!
//! Each resource is wrapped in [`ApiKeyAuth`], so a request without a valid
//! key is answered with 403 before its body is read.

mod audio;
mod speech_to_text;
mod translate;

pub use audio::get_audio;
pub use speech_to_text::{AUDIO_FIELD, speech_to_text};
pub use translate::translate;

use crate::server::middleware::ApiKeyAuth;
use actix_web::web;

/// Configure clinical routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/speech-to-text/")
            .wrap(ApiKeyAuth)
            .route(web::post().to(speech_to_text)),
    )
    .service(
        web::resource("/translate/")
            .wrap(ApiKeyAuth)
            .route(web::post().to(translate)),
    )
    .service(
        web::resource("/audio/{id}")
            .wrap(ApiKeyAuth)
            .route(web::get().to(get_audio)),
    );
}
