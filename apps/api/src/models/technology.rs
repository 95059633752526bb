use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TechnologyRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
}
