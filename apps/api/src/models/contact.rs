use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactInfoRow {
    pub id: i64,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub is_active: bool,
}

/// Incoming contact-form submission.
#[derive(Debug, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}
