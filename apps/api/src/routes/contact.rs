use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::contact::{ContactInfoRow, NewContactSubmission};
use crate::state::AppState;

/// GET /api/contact/info
pub async fn contact_info(
    State(state): State<AppState>,
) -> Result<Json<Option<ContactInfoRow>>, AppError> {
    let info = sqlx::query_as::<_, ContactInfoRow>(
        "SELECT id, email, phone, location, is_active \
         FROM contact_info WHERE is_active ORDER BY id LIMIT 1",
    )
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(info))
}

/// POST /api/contact/submissions
pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<NewContactSubmission>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    for (field, value) in [
        ("name", &submission.name),
        ("email", &submission.email),
        ("message", &submission.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }

    sqlx::query(
        "INSERT INTO contact_submissions \
            (name, email, phone, company, service, budget, timeline, message) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.phone)
    .bind(&submission.company)
    .bind(&submission.service)
    .bind(&submission.budget)
    .bind(&submission.timeline)
    .bind(&submission.message)
    .execute(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(submission_ack())))
}

/// Fixed acknowledgement body returned to the form, instead of echoing the
/// stored submission back.
fn submission_ack() -> Value {
    json!({
        "message": "Thank you! Your message has been sent successfully. \
                    I'll get back to you within 24 hours."
    })
}
