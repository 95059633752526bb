use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::technology::TechnologyRow;
use crate::state::AppState;

/// GET /api/technologies
pub async fn list_technologies(
    State(state): State<AppState>,
) -> Result<Json<Vec<TechnologyRow>>, AppError> {
    let technologies = sqlx::query_as::<_, TechnologyRow>(
        "SELECT id, name, category, sort_order, is_active \
         FROM technologies WHERE is_active ORDER BY sort_order, name",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(technologies))
}
