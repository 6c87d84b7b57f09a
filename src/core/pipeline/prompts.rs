//! Domain-context prompts sent to the language and speech-to-text models

use crate::core::providers::ChatMessage;

/// Instruction biasing the models toward clinical vocabulary
pub const MEDICAL_CONTEXT: &str = "\
You are processing healthcare communication. Pay special attention to:
- Medical terminology and abbreviations
- Symptoms and conditions
- Treatment descriptions
- Medication names
- Dosage instructions
Maintain high accuracy while preserving the original medical meaning.
";

/// Messages asking the model to correct terminology in a transcript
pub fn enhancement_messages(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(MEDICAL_CONTEXT),
        ChatMessage::user(format!("Enhance medical accuracy: {}", text)),
    ]
}

/// Messages asking the model to translate `text`
pub fn translation_messages(text: &str, source_lang: &str, target_lang: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(format!(
            "{}\nTranslate from {} to {} maintaining medical accuracy.",
            MEDICAL_CONTEXT, source_lang, target_lang
        )),
        ChatMessage::user(text),
    ]
}
