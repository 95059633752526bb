use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ServiceRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, FromRow)]
pub struct ServiceFeatureRow {
    pub id: i64,
    pub service_id: i64,
    pub name: String,
    pub sort_order: i32,
}

/// API shape: a service with its ordered feature names.
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub features: Vec<String>,
}

impl ServiceResponse {
    pub fn from_row(row: ServiceRow, features: Vec<String>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            icon: row.icon,
            color: row.color,
            sort_order: row.sort_order,
            features,
        }
    }
}
