//! Post persistence behind a trait so the pipeline can be exercised without
//! a live database. `PgPostStore` is the production implementation; tests
//! supply an in-memory store.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::post::{NewPost, PostRow};

/// Durable state the generation pipeline reads and writes.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<PostRow>>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRow>>;
    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<PostRow>>;
    async fn slug_exists(&self, slug: &str) -> Result<bool>;
    async fn insert(&self, post: NewPost) -> Result<PostRow>;
    /// Overwrites body, excerpt and read-time in place; everything else
    /// (title, slug, date, image) is preserved.
    async fn update_content(
        &self,
        id: i64,
        content: &str,
        excerpt: &str,
        read_time: &str,
    ) -> Result<()>;
    async fn update_image(&self, id: i64, image: &str) -> Result<()>;
    /// Posts whose body is empty or shorter than `max_chars` characters.
    async fn find_stale(&self, max_chars: i32) -> Result<Vec<PostRow>>;
    /// Posts with no image URL stored.
    async fn find_missing_images(&self) -> Result<Vec<PostRow>>;
    async fn all(&self) -> Result<Vec<PostRow>>;
    async fn count(&self) -> Result<i64>;
    async fn delete_all(&self) -> Result<u64>;
}

/// Repository implementation backed by sqlx and PostgreSQL.
/// `PgPool` is cheap to clone, so the store can be passed around freely.
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = "id, title, excerpt, content, author, publish_date, read_time, \
                            category, image, featured, slug, is_published, created_at, updated_at";

#[async_trait]
impl PostStore for PgPostStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<PostRow>> {
        let post = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRow>> {
        let post = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<PostRow>> {
        let post = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE publish_date = $1 \
             ORDER BY created_at LIMIT 1"
        ))
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM posts WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists.0)
    }

    async fn insert(&self, post: NewPost) -> Result<PostRow> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts \
                (title, excerpt, content, author, publish_date, read_time, \
                 category, image, featured, slug, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&post.title)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.publish_date)
        .bind(&post.read_time)
        .bind(&post.category)
        .bind(&post.image)
        .bind(post.featured)
        .bind(&post.slug)
        .bind(post.is_published)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_content(
        &self,
        id: i64,
        content: &str,
        excerpt: &str,
        read_time: &str,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE posts SET content = $2, excerpt = $3, read_time = $4, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(content)
        .bind(excerpt)
        .bind(read_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_image(&self, id: i64, image: &str) -> Result<()> {
        sqlx::query("UPDATE posts SET image = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(image)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_stale(&self, max_chars: i32) -> Result<Vec<PostRow>> {
        let posts = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE char_length(content) < $1 \
             ORDER BY publish_date DESC, created_at DESC"
        ))
        .bind(max_chars)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn find_missing_images(&self) -> Result<Vec<PostRow>> {
        let posts = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE image = '' \
             ORDER BY publish_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn all(&self) -> Result<Vec<PostRow>> {
        let posts = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY publish_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM posts").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
