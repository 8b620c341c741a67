//! Request side of theme generation.
//!
//! The generative call itself happens on the host (it owns the API key and the
//! network). This module builds what the host sends: the prompt text and the
//! structured-output schema that the response must satisfy. The response
//! comes back through [`Theme::from_json`](super::theme::Theme::from_json).

use serde_json::{json, Value};
use thiserror::Error;

/// Smallest and largest number of words asked of the generator.
pub const MIN_WORDS: usize = 6;
pub const MAX_WORDS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("theme topic is empty")]
    BlankTopic,
}

/// A validated theme-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRequest {
    topic: String,
    language: String,
}

impl ThemeRequest {
    /// Build a request for `topic` in the default target language (Cantonese).
    pub fn new(topic: &str) -> Result<Self, RequestError> {
        Self::for_language(topic, "Cantonese")
    }

    pub fn for_language(topic: &str, language: &str) -> Result<Self, RequestError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(RequestError::BlankTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            language: language.to_string(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Prompt text for the generator.
    pub fn prompt(&self) -> String {
        format!(
            "You are a creative game designer and language teacher.\n\
             Generate a visual theme for a snake game based on this concept: \"{topic}\".\n\n\
             Crucially, generate a list of {min}-{max} {lang} vocabulary words related to this \
             theme for the user to learn.\n\n\
             The snake needs a head color and a body color (hex codes).\n\
             The background should be a hex code that contrasts well with the snake.\n\
             Provide a particle color (hex) for effects.",
            topic = self.topic,
            min = MIN_WORDS,
            max = MAX_WORDS,
            lang = self.language,
        )
    }

    /// JSON schema the response must follow. Field names match [`ThemeSpec`](super::theme::ThemeSpec).
    pub fn response_schema(&self) -> Value {
        let string = |description: &str| json!({ "type": "STRING", "description": description });
        json!({
            "type": "OBJECT",
            "properties": {
                "name": string("A creative short name for the theme"),
                "headColor": string("Hex color for snake head"),
                "bodyColor": string("Hex color for snake body"),
                "backgroundColor": string("Hex color for the canvas background"),
                "particleColor": string("Hex color for explosion particles"),
                "vocabulary": {
                    "type": "ARRAY",
                    "description": "List of vocabulary words related to the theme",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "symbol": string("A single representative emoji"),
                            "targetText": string(&format!("The word written in {}", self.language)),
                            "phonetic": string("Romanization of the word"),
                            "translation": string("English translation"),
                        },
                        "required": ["symbol", "targetText", "phonetic", "translation"]
                    }
                }
            },
            "required": [
                "name", "headColor", "bodyColor", "backgroundColor", "particleColor", "vocabulary"
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_topic_is_rejected() {
        assert_eq!(ThemeRequest::new("   "), Err(RequestError::BlankTopic));
    }

    #[test]
    fn prompt_mentions_topic_and_word_count() {
        let req = ThemeRequest::new("  Street Food ").unwrap();
        assert_eq!(req.topic(), "Street Food");
        let prompt = req.prompt();
        assert!(prompt.contains("\"Street Food\""));
        assert!(prompt.contains("6-8 Cantonese vocabulary words"));
    }

    #[test]
    fn schema_requires_every_theme_field() {
        let schema = ThemeRequest::new("Tropical Fruit").unwrap().response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required.len(), 6);
        assert!(required.contains(&"particleColor"));
        assert_eq!(
            schema["properties"]["vocabulary"]["items"]["required"][1],
            "targetText"
        );
    }
}
