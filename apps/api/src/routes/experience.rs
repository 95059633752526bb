use std::collections::HashMap;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::experience::{AchievementRow, ExperienceResponse, ExperienceRow};
use crate::state::AppState;

/// GET /api/experience
///
/// Active experiences, most recent first, each with its ordered achievements.
pub async fn list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceResponse>>, AppError> {
    let rows = sqlx::query_as::<_, ExperienceRow>(
        "SELECT id, title, company, location, period_start, period_end, description, \
                sort_order, is_active, created_at, updated_at \
         FROM experiences WHERE is_active ORDER BY sort_order DESC",
    )
    .fetch_all(&state.db)
    .await?;

    let achievements = sqlx::query_as::<_, AchievementRow>(
        "SELECT a.id, a.experience_id, a.text, a.sort_order \
         FROM experience_achievements a \
         JOIN experiences e ON e.id = a.experience_id \
         WHERE e.is_active ORDER BY a.sort_order",
    )
    .fetch_all(&state.db)
    .await?;

    let mut by_experience: HashMap<i64, Vec<String>> = HashMap::new();
    for achievement in achievements {
        by_experience
            .entry(achievement.experience_id)
            .or_default()
            .push(achievement.text);
    }

    let responses = rows
        .into_iter()
        .map(|row| {
            let achievements = by_experience.remove(&row.id).unwrap_or_default();
            ExperienceResponse::from_row(row, achievements)
        })
        .collect();

    Ok(Json(responses))
}
