use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::about::{AboutContentRow, AboutHighlightRow};
use crate::state::AppState;

/// GET /api/about/content
pub async fn list_content(
    State(state): State<AppState>,
) -> Result<Json<Vec<AboutContentRow>>, AppError> {
    let sections = sqlx::query_as::<_, AboutContentRow>(
        "SELECT id, section_title, description, sort_order, is_active, created_at, updated_at \
         FROM about_content WHERE is_active ORDER BY sort_order",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(sections))
}

/// GET /api/about/highlights
pub async fn list_highlights(
    State(state): State<AppState>,
) -> Result<Json<Vec<AboutHighlightRow>>, AppError> {
    let highlights = sqlx::query_as::<_, AboutHighlightRow>(
        "SELECT id, title, description, icon, sort_order, is_active \
         FROM about_highlights WHERE is_active ORDER BY sort_order",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(highlights))
}
