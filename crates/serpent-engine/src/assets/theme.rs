use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Rgba;

/// A single word to learn, rendered as food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    /// Representative glyph drawn on the food (usually one emoji).
    #[serde(alias = "emoji")]
    pub symbol: String,
    /// Word in the target language; this is what gets spoken.
    #[serde(alias = "cantonese")]
    pub target_text: String,
    /// Romanization shown in the floating feedback text.
    #[serde(alias = "jyutping")]
    pub phonetic: String,
    /// Translation shown under the romanization.
    #[serde(alias = "english")]
    pub translation: String,
}

impl VocabularyItem {
    pub fn new(symbol: &str, target_text: &str, phonetic: &str, translation: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            target_text: target_text.to_string(),
            phonetic: phonetic.to_string(),
            translation: translation.to_string(),
        }
    }
}

/// Theme as it travels over the wire (generation service, JS host).
/// Every field is required; colors are hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSpec {
    pub name: String,
    #[serde(alias = "snakeHeadColor")]
    pub head_color: String,
    #[serde(alias = "snakeBodyColor")]
    pub body_color: String,
    pub background_color: String,
    pub particle_color: String,
    pub vocabulary: Vec<VocabularyItem>,
}

/// Reasons a theme is refused. A refused theme is never partially applied.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("malformed theme JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme name is empty")]
    EmptyName,
    #[error("theme field `{field}` is not a hex color: {value:?}")]
    BadColor { field: &'static str, value: String },
    #[error("theme has no vocabulary")]
    EmptyVocabulary,
    #[error("vocabulary item {index} has an empty `{field}`")]
    BlankVocabularyField { index: usize, field: &'static str },
}

/// Validated, render-ready theme: palette plus vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub head_color: Rgba,
    pub body_color: Rgba,
    pub background_color: Rgba,
    pub particle_color: Rgba,
    pub vocabulary: Vec<VocabularyItem>,
}

impl Theme {
    /// Parse and validate a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let spec: ThemeSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    /// Validate a wire theme. Fails closed on the first problem found.
    pub fn from_spec(spec: ThemeSpec) -> Result<Self, ThemeError> {
        let name = spec.name.trim();
        if name.is_empty() {
            return Err(ThemeError::EmptyName);
        }

        let color = |field: &'static str, value: &str| {
            Rgba::parse_hex(value).ok_or_else(|| ThemeError::BadColor {
                field,
                value: value.to_string(),
            })
        };
        let head_color = color("headColor", &spec.head_color)?;
        let body_color = color("bodyColor", &spec.body_color)?;
        let background_color = color("backgroundColor", &spec.background_color)?;
        let particle_color = color("particleColor", &spec.particle_color)?;

        if spec.vocabulary.is_empty() {
            return Err(ThemeError::EmptyVocabulary);
        }
        for (index, item) in spec.vocabulary.iter().enumerate() {
            let fields = [
                ("symbol", &item.symbol),
                ("targetText", &item.target_text),
                ("phonetic", &item.phonetic),
                ("translation", &item.translation),
            ];
            if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(ThemeError::BlankVocabularyField { index, field });
            }
        }

        Ok(Self {
            name: name.to_string(),
            head_color,
            body_color,
            background_color,
            particle_color,
            vocabulary: spec.vocabulary,
        })
    }

    /// Back to the wire form (hex colors).
    pub fn to_spec(&self) -> ThemeSpec {
        ThemeSpec {
            name: self.name.clone(),
            head_color: self.head_color.to_hex(),
            body_color: self.body_color.to_hex(),
            background_color: self.background_color.to_hex(),
            particle_color: self.particle_color.to_hex(),
            vocabulary: self.vocabulary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OCEAN: &str = r##"{
        "name": "Ocean",
        "headColor": "#0ea5e9",
        "bodyColor": "#38bdf8",
        "backgroundColor": "#082f49",
        "particleColor": "#7dd3fc",
        "vocabulary": [
            { "symbol": "🐟", "targetText": "魚", "phonetic": "jyu2", "translation": "Fish" },
            { "symbol": "🌊", "targetText": "海", "phonetic": "hoi2", "translation": "Sea" }
        ]
    }"##;

    #[test]
    fn parse_valid_theme() {
        let theme = Theme::from_json(OCEAN).unwrap();
        assert_eq!(theme.name, "Ocean");
        assert_eq!(theme.head_color, Rgba::rgb(0x0e, 0xa5, 0xe9));
        assert_eq!(theme.vocabulary.len(), 2);
        assert_eq!(theme.vocabulary[1].translation, "Sea");
    }

    #[test]
    fn parse_generator_field_names() {
        let json = r##"{
            "name": "Fruit",
            "snakeHeadColor": "#f00",
            "snakeBodyColor": "#0f0",
            "backgroundColor": "#000",
            "particleColor": "#fff",
            "vocabulary": [
                { "emoji": "🍎", "cantonese": "蘋果", "jyutping": "ping4 gwo2", "english": "Apple" }
            ]
        }"##;
        let theme = Theme::from_json(json).unwrap();
        assert_eq!(theme.body_color, Rgba::rgb(0, 0xff, 0));
        assert_eq!(theme.vocabulary[0].target_text, "蘋果");
        assert_eq!(theme.vocabulary[0].phonetic, "ping4 gwo2");
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r##"{ "name": "Half", "headColor": "#fff", "vocabulary": [] }"##;
        assert!(matches!(Theme::from_json(json), Err(ThemeError::Parse(_))));
    }

    #[test]
    fn bad_color_names_the_field() {
        let json = OCEAN.replace("#082f49", "navy");
        match Theme::from_json(&json) {
            Err(ThemeError::BadColor { field, value }) => {
                assert_eq!(field, "backgroundColor");
                assert_eq!(value, "navy");
            }
            other => panic!("expected BadColor, got {:?}", other),
        }
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let mut spec: ThemeSpec = serde_json::from_str(OCEAN).unwrap();
        spec.vocabulary.clear();
        assert!(matches!(Theme::from_spec(spec), Err(ThemeError::EmptyVocabulary)));
    }

    #[test]
    fn blank_vocabulary_field_is_rejected() {
        let mut spec: ThemeSpec = serde_json::from_str(OCEAN).unwrap();
        spec.vocabulary[1].phonetic = "  ".to_string();
        match Theme::from_spec(spec) {
            Err(ThemeError::BlankVocabularyField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "phonetic");
            }
            other => panic!("expected BlankVocabularyField, got {:?}", other),
        }
    }

    #[test]
    fn spec_round_trip_preserves_palette() {
        let theme = Theme::from_json(OCEAN).unwrap();
        let again = Theme::from_spec(theme.to_spec()).unwrap();
        assert_eq!(theme, again);
    }

    #[test]
    fn translucent_background_survives_to_spec() {
        let json = OCEAN.replace("#082f49", "#082f49cc");
        let theme = Theme::from_json(&json).unwrap();
        assert_eq!(theme.to_spec().background_color, "#082f49cc");
        assert_eq!(Theme::from_spec(theme.to_spec()).unwrap(), theme);
    }
}
