//! Language codes the speech providers can voice

/// Language codes accepted by the Google Translate speech endpoint
const SPEECH_LANGUAGES: &[&str] = &[
    "af", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es", "et",
    "fi", "fr", "gu", "hi", "hr", "hu", "hy", "id", "is", "it", "iw", "he", "ja", "jw", "km",
    "kn", "ko", "la", "lv", "mk", "ml", "mr", "ms", "my", "ne", "nl", "no", "pl", "pt", "ro",
    "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tl", "tr", "uk", "ur",
    "vi", "zh", "zh-cn", "zh-tw",
];

/// Normalize a caller-supplied language code to the form the providers expect.
///
/// Returns `None` when the code is not voiceable. Regional variants fall back
/// to their base language (`en-US` -> `en`) unless the variant itself is listed.
pub fn normalize_speech_language(code: &str) -> Option<String> {
    let lowered = code.trim().to_lowercase().replace('_', "-");
    if lowered.is_empty() {
        return None;
    }

    if SPEECH_LANGUAGES.contains(&lowered.as_str()) {
        return Some(lowered);
    }

    let base = lowered.split('-').next()?;
    SPEECH_LANGUAGES
        .contains(&base)
        .then(|| base.to_string())
}
