use std::collections::HashMap;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::service::{ServiceFeatureRow, ServiceResponse, ServiceRow};
use crate::state::AppState;

/// GET /api/services
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let rows = sqlx::query_as::<_, ServiceRow>(
        "SELECT id, title, description, icon, color, sort_order, is_active \
         FROM services WHERE is_active ORDER BY sort_order, title",
    )
    .fetch_all(&state.db)
    .await?;

    let features = sqlx::query_as::<_, ServiceFeatureRow>(
        "SELECT f.id, f.service_id, f.name, f.sort_order \
         FROM service_features f \
         JOIN services s ON s.id = f.service_id \
         WHERE s.is_active ORDER BY f.sort_order, f.name",
    )
    .fetch_all(&state.db)
    .await?;

    let mut by_service: HashMap<i64, Vec<String>> = HashMap::new();
    for feature in features {
        by_service
            .entry(feature.service_id)
            .or_default()
            .push(feature.name);
    }

    let responses = rows
        .into_iter()
        .map(|row| {
            let features = by_service.remove(&row.id).unwrap_or_default();
            ServiceResponse::from_row(row, features)
        })
        .collect();

    Ok(Json(responses))
}
