// All LLM prompt constants for the story generation pipeline.

/// System prompt — author persona plus JSON-only output discipline.
pub const STORY_SYSTEM: &str =
    "You are a creative, professional and award-winning author who writes engaging, \
    exciting, suspenseful and emotionally rich short stories with strong character arcs \
    and a satisfying ending matched to the reader's age. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Format instructions obligating exactly the three story fields.
pub const FORMAT_INSTRUCTIONS: &str = r#"Return a JSON object with this EXACT schema (no extra fields):
{
  "Topic": "Title or topic of the story",
  "Story": "Age-appropriate story content",
  "Moral": "Moral of the story"
}"#;

/// Content-safety directive injected when the effective parent-safe flag is on.
pub const PARENT_SAFE_INSTRUCTION: &str = "Parent-safe mode is ON: avoid violence, \
frightening scenes, romance and dark themes entirely.\n\n";

/// Story prompt template.
/// Replace: {topic}, {age}, {genre}, {language}, {name}, {format_instructions},
///          {age_guideline}, {safety_instruction}
pub const STORY_PROMPT_TEMPLATE: &str = r#"Write a 400 word story based on the following details:

Theme / Topic: {topic}
Reader Age: {age}
Genre: {genre}
Story Language: {language}
Main Character: {name}

{format_instructions}

Age Guidelines:
- Age 3-6: Very simple words, cheerful tone, short sentences
- Age 7-12: Simple plot, light adventure, positive moral
- Age 13-17: Deeper emotions, character growth, mild conflict
- Age 18+: Mature themes, nuanced characters, richer language

For this reader specifically: {age_guideline}

{safety_instruction}Ensure the content is fully appropriate for the given age."#;

/// Age-banded content guidance lookup. The shell validates age into 3-100;
/// anything above 17 falls into the mature band.
pub fn age_guideline(age: u8) -> &'static str {
    match age {
        0..=6 => "Very simple words, cheerful tone, short sentences",
        7..=12 => "Simple plot, light adventure, positive moral",
        13..=17 => "Deeper emotions, character growth, mild conflict",
        _ => "Mature themes, nuanced characters, richer language",
    }
}
