use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ExperienceRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period_start: String,
    pub period_end: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AchievementRow {
    pub id: i64,
    pub experience_id: i64,
    pub text: String,
    pub sort_order: i32,
}

/// API shape: an experience with its achievements and the derived `period`.
#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub achievements: Vec<String>,
}

impl ExperienceResponse {
    pub fn from_row(row: ExperienceRow, achievements: Vec<String>) -> Self {
        let period = if row.period_end.is_empty() {
            format!("{} - Present", row.period_start)
        } else {
            format!("{} - {}", row.period_start, row.period_end)
        };
        Self {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            period,
            description: row.description,
            sort_order: row.sort_order,
            achievements,
        }
    }
}
