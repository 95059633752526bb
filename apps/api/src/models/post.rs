use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted blog post. Serialized shape matches the original public API
/// (`date` for the publish date).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "date")]
    pub publish_date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub image: String,
    pub featured: bool,
    pub slug: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List shape: everything except the body and the audit timestamps.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostListItem {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    #[serde(rename = "date")]
    pub publish_date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub image: String,
    pub featured: bool,
    pub slug: String,
}

/// Fields for inserting a new post. The pipeline always sets
/// `featured = false` and `is_published = true`; only the admin surface
/// flips those afterwards.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub publish_date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub image: String,
    pub featured: bool,
    pub slug: String,
    pub is_published: bool,
}
