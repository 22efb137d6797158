//! Shared domain types for story generation.
//!
//! `StoryResult` is the wire contract with the generation service: field
//! names are capitalized on the wire and unknown fields are rejected, so a
//! reply either coerces exactly or fails as a schema violation.

use serde::{Deserialize, Serialize};

/// The three-field record every downstream consumer agrees on.
///
/// Produced exactly once per generation request and immutable afterwards.
/// No identity, no history — the browser holds it between the generate call
/// and the PDF download call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryResult {
    /// Title or topic of the story.
    #[serde(rename = "Topic")]
    pub topic: String,
    /// Story content. Line breaks are preserved verbatim for layout.
    #[serde(rename = "Story")]
    pub story: String,
    /// Moral of the story. Always present on the wire; UI visibility is
    /// genre-gated, the PDF carries it unconditionally.
    #[serde(rename = "Moral")]
    pub moral: String,
}

/// Story genre offered by the shell. Wire names match the UI labels exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Adventure,
    Educational,
    #[serde(rename = "Fairy Tale")]
    FairyTale,
    Fantasy,
    Fiction,
    Motivational,
    Mystery,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// Whether the moral section is shown in the UI for this genre.
    pub fn moral_visible(self) -> bool {
        matches!(self, Genre::Motivational | Genre::Educational)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Adventure => "Adventure",
            Genre::Educational => "Educational",
            Genre::FairyTale => "Fairy Tale",
            Genre::Fantasy => "Fantasy",
            Genre::Fiction => "Fiction",
            Genre::Motivational => "Motivational",
            Genre::Mystery => "Mystery",
            Genre::SciFi => "Sci-Fi",
        }
    }
}

/// Story language. Collected from the shell and interpolated into the
/// instruction; the output contract does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Gujarati,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Gujarati => "Gujarati",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_result_deserializes_from_wire_shape() {
        let json = r#"{
            "Topic": "The Brave Fox",
            "Story": "Once upon a time, a fox named Mia lived in the woods.\nShe was brave.",
            "Moral": "Courage grows with every small step."
        }"#;

        let story: StoryResult = serde_json::from_str(json).unwrap();
        assert_eq!(story.topic, "The Brave Fox");
        assert!(story.story.contains('\n'));
        assert_eq!(story.moral, "Courage grows with every small step.");
    }

    #[test]
    fn test_story_result_missing_field_is_rejected() {
        let json = r#"{"Topic": "The Brave Fox", "Story": "Once upon a time."}"#;
        let result: Result<StoryResult, _> = serde_json::from_str(json);
        assert!(result.is_err(), "a reply without Moral must fail");
    }

    #[test]
    fn test_story_result_extra_field_is_rejected() {
        let json = r#"{
            "Topic": "t",
            "Story": "s",
            "Moral": "m",
            "Commentary": "I hope you like it!"
        }"#;
        let result: Result<StoryResult, _> = serde_json::from_str(json);
        assert!(result.is_err(), "a reply with extra fields must fail");
    }

    #[test]
    fn test_story_result_serializes_with_wire_names() {
        let story = StoryResult {
            topic: "t".to_string(),
            story: "s".to_string(),
            moral: "m".to_string(),
        };
        let value = serde_json::to_value(&story).unwrap();
        assert_eq!(value["Topic"], "t");
        assert_eq!(value["Story"], "s");
        assert_eq!(value["Moral"], "m");
    }

    #[test]
    fn test_genre_wire_names_match_ui_labels() {
        let fairy: Genre = serde_json::from_str(r#""Fairy Tale""#).unwrap();
        assert_eq!(fairy, Genre::FairyTale);
        let scifi: Genre = serde_json::from_str(r#""Sci-Fi""#).unwrap();
        assert_eq!(scifi, Genre::SciFi);
        assert_eq!(serde_json::to_value(Genre::FairyTale).unwrap(), "Fairy Tale");
    }

    #[test]
    fn test_moral_visible_only_for_motivational_and_educational() {
        assert!(Genre::Motivational.moral_visible());
        assert!(Genre::Educational.moral_visible());
        for genre in [
            Genre::Adventure,
            Genre::FairyTale,
            Genre::Fantasy,
            Genre::Fiction,
            Genre::Mystery,
            Genre::SciFi,
        ] {
            assert!(!genre.moral_visible(), "{} must hide the moral", genre.as_str());
        }
    }

    #[test]
    fn test_language_deserializes_from_ui_labels() {
        let lang: Language = serde_json::from_str(r#""Gujarati""#).unwrap();
        assert_eq!(lang, Language::Gujarati);
        assert_eq!(lang.as_str(), "Gujarati");
    }
}
