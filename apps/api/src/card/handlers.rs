use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::card::{render_card, RenderedCard};
use crate::errors::AppError;
use crate::state::AppState;

/// Longest accepted card text, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;

#[derive(Deserialize)]
pub struct CardQuery {
    pub text: String,
}

#[derive(Deserialize)]
pub struct RandomCardQuery {
    /// Pins the record instead of drawing one at random.
    pub index: Option<usize>,
}

/// GET /api/v1/card?text=...
pub async fn handle_card(
    State(state): State<AppState>,
    Query(params): Query<CardQuery>,
) -> Result<Json<RenderedCard>, AppError> {
    validate_text(&params.text)?;
    let card = render_in_background(&state, params.text).await?;
    Ok(Json(card))
}

/// GET /api/v1/card/random
pub async fn handle_random_card(
    State(state): State<AppState>,
    Query(params): Query<RandomCardQuery>,
) -> Result<Json<RenderedCard>, AppError> {
    let seed = match params.index {
        Some(index) => index as u128,
        None => Uuid::new_v4().as_u128(),
    };
    let text = state.records.pick(seed).await?;
    info!("Rendering random record ({} chars)", text.chars().count());
    let card = render_in_background(&state, text).await?;
    Ok(Json(card))
}

fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "text is {chars} characters; the limit is {MAX_TEXT_CHARS}"
        )));
    }
    Ok(())
}

/// Layout is CPU-bound; run it off the async executor.
async fn render_in_background(state: &AppState, text: String) -> Result<RenderedCard, AppError> {
    let canvas = state.config.canvas;
    let layout = state.config.layout.clone();
    let card = tokio::task::spawn_blocking(move || render_card(&text, &canvas, &layout))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in card render: {e}")))??;
    Ok(card)
}
