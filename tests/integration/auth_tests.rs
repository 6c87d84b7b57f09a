//! API key gate integration tests
//!
//! A rejected request must never reach a provider or touch the disk.

#[cfg(test)]
mod tests {
    use crate::common::TestGateway;
    use crate::common::fixtures::{API_KEY, multipart_body, multipart_content_type, wav_bytes};
    use crate::common::providers::forbid_all_traffic;
    use actix_web::http::StatusCode;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test;
    use medtalk_gateway::server::HttpServer;
    use serde_json::Value;
    use wiremock::MockServer;

    fn speech_request() -> test::TestRequest {
        test::TestRequest::post()
            .uri("/speech-to-text/")
            .insert_header((CONTENT_TYPE, multipart_content_type()))
            .set_payload(multipart_body("audio", "visit.wav", &wav_bytes(1)))
    }

    fn translate_request() -> test::TestRequest {
        test::TestRequest::post().uri("/translate/").set_form([
            ("text", "Take two tablets daily"),
            ("source_lang", "en"),
            ("target_lang", "es"),
        ])
    }

    /// Missing key on every protected endpoint: 403, no upstream calls
    #[actix_web::test]
    async fn test_missing_key_is_forbidden_everywhere() {
        let server = MockServer::start().await;
        forbid_all_traffic(&server).await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let requests = vec![
            speech_request().to_request(),
            translate_request().to_request(),
            test::TestRequest::get()
                .uri("/audio/4a0f7c4e-3c55-4b8e-9d1c-2f8f6f3a9b10")
                .to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "FORBIDDEN");
            assert_eq!(body["error"]["message"], "Invalid API key");
        }

        assert_eq!(gateway.staged_files(), 0);
        assert_eq!(gateway.artifact_files(), 0);
    }

    /// A key outside the allow-list is treated like a missing one
    #[actix_web::test]
    async fn test_unknown_key_is_forbidden() {
        let server = MockServer::start().await;
        forbid_all_traffic(&server).await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        for key in ["wrong-key", "", API_KEY.to_uppercase().as_str()] {
            let req = speech_request()
                .insert_header(("X-API-Key", key))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN, "key {:?}", key);
        }

        assert_eq!(gateway.staged_files(), 0);
    }

    /// Health needs no key
    #[actix_web::test]
    async fn test_health_is_public() {
        let server = MockServer::start().await;
        forbid_all_traffic(&server).await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], medtalk_gateway::VERSION);
    }

    /// Caller-supplied request ids are echoed, others are minted
    #[actix_web::test]
    async fn test_request_id_header() {
        let server = MockServer::start().await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-request-id", "ward-7-req-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("x-request-id").unwrap(), "ward-7-req-1");

        let resp = test::call_service(&app, translate_request().to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(resp.headers().contains_key("x-request-id"));
    }

    /// Error bodies carry the same request id as the response header
    #[actix_web::test]
    async fn test_forbidden_body_carries_request_id() {
        let server = MockServer::start().await;
        forbid_all_traffic(&server).await;
        let gateway = TestGateway::start(&server).await;
        let app = test::init_service(HttpServer::create_app(gateway.state.clone())).await;

        let req = translate_request()
            .insert_header(("x-request-id", "ward-7-req-2"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(resp.headers().get("x-request-id").unwrap(), "ward-7-req-2");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["request_id"], "ward-7-req-2");
    }
}
