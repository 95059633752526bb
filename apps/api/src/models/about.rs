use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AboutContentRow {
    pub id: i64,
    pub section_title: String,
    pub description: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AboutHighlightRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
}
