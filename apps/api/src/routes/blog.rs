//! Read-only blog endpoints. Only published posts are visible here.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::post::{PostListItem, PostRow};
use crate::state::AppState;

const LIST_COLUMNS: &str =
    "id, title, excerpt, author, publish_date, read_time, category, image, featured, slug";

const DETAIL_COLUMNS: &str = "id, title, excerpt, content, author, publish_date, read_time, \
                              category, image, featured, slug, is_published, created_at, updated_at";

/// GET /api/blog/posts
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostListItem>>, AppError> {
    let posts = sqlx::query_as::<_, PostListItem>(&format!(
        "SELECT {LIST_COLUMNS} FROM posts WHERE is_published \
         ORDER BY publish_date DESC, created_at DESC"
    ))
    .fetch_all(&state.db)
    .await?;

    Ok(Json(posts))
}

/// GET /api/blog/posts/:key
///
/// Looks up by numeric id first, then by slug, matching the original API's
/// dual lookup behavior.
pub async fn post_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<PostRow>, AppError> {
    if let Ok(id) = key.parse::<i64>() {
        let by_id = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM posts WHERE id = $1 AND is_published"
        ))
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
        if let Some(post) = by_id {
            return Ok(Json(post));
        }
    }

    let by_slug = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {DETAIL_COLUMNS} FROM posts WHERE slug = $1 AND is_published"
    ))
    .bind(&key)
    .fetch_optional(&state.db)
    .await?;

    by_slug
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
}

/// GET /api/blog/posts/featured
///
/// The single featured post, or null when none is marked.
pub async fn featured_post(
    State(state): State<AppState>,
) -> Result<Json<Option<PostRow>>, AppError> {
    let post = sqlx::query_as::<_, PostRow>(&format!(
        "SELECT {DETAIL_COLUMNS} FROM posts WHERE is_published AND featured \
         ORDER BY publish_date DESC, created_at DESC LIMIT 1"
    ))
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(post))
}

/// GET /api/blog/posts/recent
///
/// The five most recent non-featured posts.
pub async fn recent_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostListItem>>, AppError> {
    let posts = sqlx::query_as::<_, PostListItem>(&format!(
        "SELECT {LIST_COLUMNS} FROM posts WHERE is_published AND NOT featured \
         ORDER BY publish_date DESC, created_at DESC LIMIT 5"
    ))
    .fetch_all(&state.db)
    .await?;

    Ok(Json(posts))
}
