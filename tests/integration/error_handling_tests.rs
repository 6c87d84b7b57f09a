//! Error handling integration tests
//!
//! Provider failures must reach callers only as generic messages.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use medtalk_gateway::core::providers::ProviderError;
    use medtalk_gateway::utils::error::{ErrorResponse, GatewayError};

    async fn body_of(error: GatewayError) -> (u16, ErrorResponse) {
        let response = error.error_response();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Every provider failure is a 500 without upstream text
    #[tokio::test]
    async fn test_provider_errors_are_generic() {
        let errors = [
            ProviderError::authentication("openai", "Incorrect API key sk-live-123"),
            ProviderError::api_error("openai", 502, "bad gateway for patient MRN 1234567"),
            ProviderError::network("google_tts", "dns failure"),
            ProviderError::timeout("openai", "no reply within 30s"),
            ProviderError::response_parsing("openai", "missing choices"),
            ProviderError::unsupported_language("google_tts", "tlh"),
        ];

        for provider_err in errors {
            let (status, body) = body_of(provider_err.into()).await;
            assert_eq!(status, 500);
            assert_eq!(body.error.code, "PROVIDER_ERROR");
            assert!(!body.error.message.contains("sk-live"));
            assert!(!body.error.message.contains("MRN"));
        }
    }

    /// Request-shape errors keep their message and status
    #[tokio::test]
    async fn test_client_errors_keep_status() {
        let (status, body) = body_of(GatewayError::validation("No audio file provided")).await;
        assert_eq!(status, 400);
        assert!(body.error.message.contains("No audio file provided"));

        let (status, _) = body_of(GatewayError::not_found("Audio not found")).await;
        assert_eq!(status, 404);

        let (status, _) = body_of(GatewayError::gone("Audio is no longer available")).await;
        assert_eq!(status, 410);
    }

    /// Startup errors render their layout through Display
    #[test]
    fn test_server_error_display() {
        let err = GatewayError::server("Port 8000 is already in use");
        assert_eq!(err.to_string(), "Server error: Port 8000 is already in use");
    }

    #[test]
    fn test_io_conversion() {
        let err: GatewayError = std::io::Error::other("disk full").into();
        assert!(matches!(err, GatewayError::Io(_)));
        assert_eq!(err.status_code().as_u16(), 500);
    }
}
