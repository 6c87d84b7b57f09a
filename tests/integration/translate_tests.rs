//! Translation and audio retrieval integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestGateway;
    use crate::common::fixtures::{API_KEY, SPOKEN_AUDIO};
    use crate::common::providers::{failing_translation, google_tts, translation};
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test;
    use medtalk_gateway::server::HttpServer;
    use serde_json::Value;
    use wiremock::MockServer;

    fn translate_request(text: &str, source: &str, target: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/translate/")
            .insert_header(("X-API-Key", API_KEY))
            .set_form([("text", text), ("source_lang", source), ("target_lang", target)])
    }

    /// Text is translated, voiced, sealed and retrievable through its link
    #[actix_web::test]
    async fn test_translate_and_fetch_audio() {
        let server = MockServer::start().await;
        translation("Tome dos tabletas al día")
            .expect(1)
            .mount(&server)
            .await;
        google_tts("es", SPOKEN_AUDIO).expect(1).mount(&server).await;

        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = translate_request("Take two tablets daily", "en", "es").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["translated_text"], "Tome dos tabletas al día");

        let audio_path = body["audio_path"].as_str().unwrap();
        assert!(!audio_path.is_empty());
        assert!(audio_path.starts_with("/audio/"));
        assert!(!audio_path.contains(gateway.artifact_dir.path().to_str().unwrap()));
        assert_eq!(gateway.artifact_files(), 1);

        let req = test::TestRequest::get()
            .uri(audio_path)
            .insert_header(("X-API-Key", API_KEY))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "audio/mpeg");
        assert_eq!(test::read_body(resp).await.as_ref(), SPOKEN_AUDIO);

        // Any allow-listed key may fetch it, no key may not
        let req = test::TestRequest::get()
            .uri(audio_path)
            .insert_header(("X-API-Key", "second-clinic-key"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(audio_path).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    /// The artifact at rest is not the plaintext audio
    #[actix_web::test]
    async fn test_audio_is_encrypted_at_rest() {
        let server = MockServer::start().await;
        translation("Tome dos tabletas al día").mount(&server).await;
        google_tts("es", SPOKEN_AUDIO).mount(&server).await;

        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = translate_request("Take two tablets daily", "en", "es").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let stored: Vec<Vec<u8>> = std::fs::read_dir(gateway.artifact_dir.path())
            .unwrap()
            .map(|entry| std::fs::read(entry.unwrap().path()).unwrap())
            .collect();
        assert_eq!(stored.len(), 1);
        assert!(
            !stored[0]
                .windows(SPOKEN_AUDIO.len())
                .any(|window| window == SPOKEN_AUDIO)
        );
    }

    /// Translation failure: generic 500 and nothing synthesized
    #[actix_web::test]
    async fn test_translation_failure_produces_no_audio() {
        let server = MockServer::start().await;
        failing_translation(500).expect(1).mount(&server).await;
        google_tts("es", SPOKEN_AUDIO).expect(0).mount(&server).await;

        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = translate_request("Take two tablets daily", "en", "es").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Translation failed");
        assert_eq!(gateway.artifact_files(), 0);
    }

    /// A target language the voice backend cannot speak fails after translation
    #[actix_web::test]
    async fn test_unsupported_target_language() {
        let server = MockServer::start().await;
        translation("texte").mount(&server).await;

        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = translate_request("text", "en", "xx-klingon").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(gateway.artifact_files(), 0);
    }

    /// Unknown ids are 404; ids from a previous process are 410
    #[actix_web::test]
    async fn test_missing_and_stale_audio() {
        let server = MockServer::start().await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let fetch = |uri: String| {
            test::TestRequest::get()
                .uri(&uri)
                .insert_header(("X-API-Key", API_KEY))
                .to_request()
        };

        let unknown = uuid::Uuid::new_v4();
        let resp = test::call_service(&app, fetch(format!("/audio/{}", unknown))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(&app, fetch("/audio/not-a-uuid".to_string())).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // Sealed under a key this process never had
        let stale = uuid::Uuid::new_v4();
        std::fs::write(
            gateway.artifact_dir.path().join(format!("{}.mp3", stale)),
            "c3RhbGUgY2lwaGVydGV4dCBmcm9tIGFuIG9sZGVyIHByb2Nlc3M=",
        )
        .unwrap();
        let resp = test::call_service(&app, fetch(format!("/audio/{}", stale))).await;
        assert_eq!(resp.status(), StatusCode::GONE);
    }

    /// Form validation
    #[actix_web::test]
    async fn test_invalid_forms() {
        let server = MockServer::start().await;
        crate::common::providers::forbid_all_traffic(&server).await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let resp = test::call_service(&app, translate_request("", "en", "es").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/translate/")
            .insert_header(("X-API-Key", API_KEY))
            .set_form([("text", "hello"), ("source_lang", "en")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
