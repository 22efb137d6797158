//! Axum route handlers for the story API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_story, StoryRequest};
use crate::models::story::StoryResult;
use crate::render::render_story_pdf;
use crate::state::AppState;

const MIN_AGE: u8 = 3;
const MAX_AGE: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Response from the generation pipeline.
///
/// The full result is echoed back wire-cased so the shell can post it
/// unchanged to the PDF endpoint; `moral_visible` carries the genre-derived
/// display rule so the page never decides it locally.
#[derive(Debug, Serialize)]
pub struct GenerateStoryResponse {
    pub story: StoryResult,
    pub moral_visible: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn validate(request: &StoryRequest) -> Result<(), AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.name.trim().is_empty() {
        return Err(AppError::Validation(
            "character name cannot be empty".to_string(),
        ));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&request.age) {
        return Err(AppError::Validation(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}"
        )));
    }
    Ok(())
}

/// POST /api/v1/stories
///
/// Full generation pipeline: validate → assemble prompt → LLM call → schema
/// coercion. The generation client is never invoked when validation fails.
pub async fn handle_generate_story(
    State(state): State<AppState>,
    Json(request): Json<StoryRequest>,
) -> Result<Json<GenerateStoryResponse>, AppError> {
    validate(&request)?;

    let story = generate_story(&state.llm, &request).await?;

    Ok(Json(GenerateStoryResponse {
        moral_visible: request.genre.moral_visible(),
        story,
    }))
}

/// POST /api/v1/stories/pdf
///
/// Renders a previously generated result and returns the bytes as a
/// `story.pdf` attachment. Rendering is CPU-bound — run via `spawn_blocking`.
pub async fn handle_download_pdf(Json(story): Json<StoryResult>) -> Result<Response, AppError> {
    if story.topic.trim().is_empty() {
        return Err(AppError::Validation(
            "story topic cannot be empty".to_string(),
        ));
    }

    let path = tokio::task::spawn_blocking(move || render_story_pdf(&story))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task panicked: {e}")))??;

    // The renderer keeps the temp file; platform temp cleanup owns its lifetime.
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "failed to read rendered PDF {}: {e}",
            path.display()
        ))
    })?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"story.pdf\"",
        ),
    ];

    Ok((headers, bytes).into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::story::{Genre, Language};

    fn request() -> StoryRequest {
        StoryRequest {
            topic: "a brave fox".to_string(),
            genre: Genre::Adventure,
            language: Language::English,
            age: 8,
            name: "Mia".to_string(),
            parent_safe: true,
        }
    }

    #[test]
    fn test_validate_accepts_a_complete_request() {
        assert!(validate(&request()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_topic() {
        let mut req = request();
        req.topic = "   ".to_string();
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut req = request();
        req.name = String::new();
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_age_out_of_range() {
        let mut req = request();
        req.age = 2;
        assert!(matches!(validate(&req), Err(AppError::Validation(_))));
        req.age = 3;
        assert!(validate(&req).is_ok());
        req.age = 100;
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn test_generate_response_shape() {
        let response = GenerateStoryResponse {
            story: StoryResult {
                topic: "t".to_string(),
                story: "s".to_string(),
                moral: "m".to_string(),
            },
            moral_visible: false,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["moral_visible"], false);
        assert_eq!(value["story"]["Topic"], "t");
        assert_eq!(value["story"]["Moral"], "m");
    }
}
