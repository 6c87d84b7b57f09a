//! wiremock doubles for the upstream providers
//!
//! Enhancement and translation both call `/chat/completions`; the doubles
//! tell them apart by the prompt text in the request body.

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{any, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Credential the OpenAI double expects
pub const OPENAI_KEY: &str = "sk-integration-test";

const ENHANCEMENT_MARKER: &str = "Enhance medical accuracy";
const TRANSLATION_MARKER: &str = "Translate from";

fn chat_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
}

fn chat(marker: &str, response: ResponseTemplate) -> Mock {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(marker))
        .respond_with(response)
}

/// Whisper double answering with `text`
pub fn transcription(text: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .and(header("authorization", format!("Bearer {}", OPENAI_KEY).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": text })))
}

/// Whisper double failing with `status`
pub fn failing_transcription(status: u16) -> Mock {
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
}

/// Enhancement double answering with `content`
pub fn enhancement(content: &str) -> Mock {
    chat(ENHANCEMENT_MARKER, chat_reply(content))
}

/// Enhancement double failing with `status`
pub fn failing_enhancement(status: u16) -> Mock {
    chat(ENHANCEMENT_MARKER, ResponseTemplate::new(status))
}

/// Enhancement double that answers only after `delay`
pub fn slow_enhancement(content: &str, delay: Duration) -> Mock {
    chat(ENHANCEMENT_MARKER, chat_reply(content).set_delay(delay))
}

/// Translation double answering with `content`
pub fn translation(content: &str) -> Mock {
    chat(TRANSLATION_MARKER, chat_reply(content))
}

/// Translation double failing with `status`
pub fn failing_translation(status: u16) -> Mock {
    chat(TRANSLATION_MARKER, ResponseTemplate::new(status))
}

/// Translation double that answers only after `delay`
pub fn slow_translation(content: &str, delay: Duration) -> Mock {
    chat(TRANSLATION_MARKER, chat_reply(content).set_delay(delay))
}

/// Google Translate TTS double for `language`
pub fn google_tts(language: &str, audio: &[u8]) -> Mock {
    Mock::given(method("GET"))
        .and(path("/translate_tts"))
        .and(query_param("tl", language))
        .respond_with(ResponseTemplate::new(200).set_body_raw(audio.to_vec(), "audio/mpeg"))
}

/// Catch-all that must never be hit; proves no upstream traffic happened
pub async fn forbid_all_traffic(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
