//! Stage time budget integration tests
//!
//! Budgets are whole seconds, so these tests use a one-second budget against
//! a double that answers after three.

#[cfg(test)]
mod tests {
    use crate::common::TestGateway;
    use crate::common::fixtures::{
        API_KEY, SPOKEN_AUDIO, multipart_body, multipart_content_type, wav_bytes,
    };
    use crate::common::providers::{google_tts, slow_enhancement, slow_translation, transcription};
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test;
    use medtalk_gateway::server::HttpServer;
    use serde_json::Value;
    use std::time::{Duration, Instant};
    use wiremock::MockServer;

    const UPSTREAM_DELAY: Duration = Duration::from_secs(3);

    /// A slow enhancement degrades to the raw transcript instead of hanging
    #[actix_web::test]
    async fn test_slow_enhancement_degrades() {
        let server = MockServer::start().await;
        transcription("chest pain for 3 days").mount(&server).await;
        slow_enhancement("too late", UPSTREAM_DELAY)
            .mount(&server)
            .await;

        let gateway = TestGateway::start_with(&server, |config| {
            config.gateway.pipeline.timeouts.enhancement_secs = 1;
        })
        .await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/speech-to-text/")
            .insert_header((CONTENT_TYPE, multipart_content_type()))
            .insert_header(("X-API-Key", API_KEY))
            .set_payload(multipart_body("audio", "visit.wav", &wav_bytes(1)))
            .to_request();

        let started = Instant::now();
        let resp = test::call_service(&app, req).await;
        assert!(started.elapsed() < UPSTREAM_DELAY);
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["transcription"], "chest pain for 3 days");
        assert_eq!(gateway.staged_files(), 0);
    }

    /// A slow translation fails the request and produces no audio
    #[actix_web::test]
    async fn test_slow_translation_fails() {
        let server = MockServer::start().await;
        slow_translation("demasiado tarde", UPSTREAM_DELAY)
            .mount(&server)
            .await;
        google_tts("es", SPOKEN_AUDIO).expect(0).mount(&server).await;

        let gateway = TestGateway::start_with(&server, |config| {
            config.gateway.pipeline.timeouts.translation_secs = 1;
        })
        .await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = test::TestRequest::post()
            .uri("/translate/")
            .insert_header(("X-API-Key", API_KEY))
            .set_form([
                ("text", "Take two tablets daily"),
                ("source_lang", "en"),
                ("target_lang", "es"),
            ])
            .to_request();

        let started = Instant::now();
        let resp = test::call_service(&app, req).await;
        assert!(started.elapsed() < UPSTREAM_DELAY);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Translation failed");
        assert_eq!(gateway.artifact_files(), 0);
    }
}
