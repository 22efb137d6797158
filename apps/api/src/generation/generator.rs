//! Story generation — orchestrates the pipeline for one user action.
//!
//! Flow: assemble prompt → LLM call → coerce reply into `StoryResult`.
//! One attempt per request: every failure is terminal for the current cycle
//! and propagates to the shell, which surfaces it without crashing.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{
    age_guideline, FORMAT_INSTRUCTIONS, PARENT_SAFE_INSTRUCTION, STORY_PROMPT_TEMPLATE,
    STORY_SYSTEM,
};
use crate::llm_client::LlmClient;
use crate::models::story::{Genre, Language, StoryResult};

// ────────────────────────────────────────────────────────────────────────────
// Request type
// ────────────────────────────────────────────────────────────────────────────

/// Story generation request, straight from the shell's form.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRequest {
    pub topic: String,
    pub genre: Genre,
    pub language: Language,
    pub age: u8,
    pub name: String,
    #[serde(default = "default_parent_safe")]
    pub parent_safe: bool,
}

fn default_parent_safe() -> bool {
    true
}

impl StoryRequest {
    /// The parent-safe flag actually passed to generation: forced off above
    /// age 18, regardless of the toggle state.
    pub fn effective_parent_safe(&self) -> bool {
        if self.age > 18 {
            false
        } else {
            self.parent_safe
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the generation instruction from the user inputs.
///
/// Topic and name text is passed through untouched — only the shell checks
/// that the fields are non-empty. The age band and the effective parent-safe
/// directive are derived here so no caller can bypass them.
pub fn assemble_story_prompt(request: &StoryRequest) -> String {
    let safety_instruction = if request.effective_parent_safe() {
        PARENT_SAFE_INSTRUCTION
    } else {
        ""
    };

    STORY_PROMPT_TEMPLATE
        .replace("{topic}", &request.topic)
        .replace("{age}", &request.age.to_string())
        .replace("{genre}", request.genre.as_str())
        .replace("{language}", request.language.as_str())
        .replace("{name}", &request.name)
        .replace("{format_instructions}", FORMAT_INSTRUCTIONS)
        .replace("{age_guideline}", age_guideline(request.age))
        .replace("{safety_instruction}", safety_instruction)
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one generation cycle and coerces the reply into a `StoryResult`.
pub async fn generate_story(
    llm: &LlmClient,
    request: &StoryRequest,
) -> Result<StoryResult, AppError> {
    let prompt = assemble_story_prompt(request);

    info!(
        "Generating story: genre={}, age={}, language={}, parent_safe={}",
        request.genre.as_str(),
        request.age,
        request.language.as_str(),
        request.effective_parent_safe()
    );

    let story = llm.call_json::<StoryResult>(&prompt, STORY_SYSTEM).await?;

    info!("Story generated: topic={:?}", story.topic);

    Ok(story)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
