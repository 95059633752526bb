//! Ingestion and idempotency — turns extracted fields into persisted posts.
//!
//! Flow: build prompt → one generation call → extract fields → derive
//! slug/image → insert. The regenerate path re-enters at the generation call
//! for an existing record and only overwrites body, excerpt and read-time.
//!
//! The "one post per day" rule is a read-then-write pre-check, not a storage
//! constraint: the pipeline runs once per scheduled trigger, and `force` is
//! allowed to add a second post for the same date.

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
use tracing::{info, warn};

use crate::generation::extract::parse_reply;
use crate::generation::images::image_url;
use crate::generation::prompts::build_prompt;
use crate::generation::slug::slugify;
use crate::llm_client::TextGenerator;
use crate::models::post::{NewPost, PostRow};
use crate::store::PostStore;

/// Bodies under this many characters count as missing and qualify for
/// bulk regeneration.
pub const STALE_CONTENT_CHARS: i32 = 500;

/// Options for a new-post run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub category: Option<String>,
    pub topic: Option<String>,
    /// Bypass the one-post-per-day skip check.
    pub force: bool,
}

/// Result of a new-post run.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// A post already existed for today and `force` was not set.
    /// No generation call was made and nothing was written.
    Skipped { existing_title: String },
    Created(PostRow),
}

/// Outcome of a bulk regeneration pass.
#[derive(Debug, PartialEq, Eq)]
pub struct BulkReport {
    pub attempted: usize,
    pub updated: usize,
}

/// Which posts an image refresh touches.
#[derive(Debug, Clone, Copy)]
pub enum ImageScope {
    All,
    Id(i64),
    MissingOnly,
}

/// Today's post, if one exists. The new-post skip decision depends only on
/// this lookup, so callers can settle it before constructing a generation
/// client. An unconfigured scheduled run still exits cleanly on skip days.
pub async fn existing_post_for_today(store: &dyn PostStore) -> Result<Option<PostRow>> {
    store.find_by_date(Local::now().date_naive()).await
}

/// New-post mode: generate and persist today's post.
pub async fn generate_daily_post(
    store: &dyn PostStore,
    llm: &dyn TextGenerator,
    options: &GenerateOptions,
) -> Result<GenerateOutcome> {
    let today = Local::now().date_naive();

    if !options.force {
        if let Some(existing) = existing_post_for_today(store).await? {
            info!("blog post already exists for {today}: {}", existing.title);
            return Ok(GenerateOutcome::Skipped {
                existing_title: existing.title,
            });
        }
    }

    let weekday = Local::now().weekday().num_days_from_monday();
    let prompt = build_prompt(
        options.category.as_deref(),
        options.topic.as_deref(),
        weekday,
    );
    info!(
        "generating blog post (category: {}, topic: {})",
        prompt.category, prompt.topic
    );

    let raw = llm.complete(prompt.system, &prompt.user).await?;
    let generated = parse_reply(&raw, &prompt.category);

    let slug = unique_slug(store, &slugify(&generated.title)).await?;
    let image = image_url(&generated.title, &generated.category);

    let row = store
        .insert(NewPost {
            title: generated.title,
            excerpt: generated.excerpt,
            content: generated.content,
            author: generated.author,
            publish_date: today,
            read_time: generated.read_time,
            category: generated.category,
            image,
            // Only one post is ever featured; this pipeline never sets it.
            featured: false,
            slug,
            is_published: true,
        })
        .await?;

    info!("created blog post {} ({})", row.id, row.slug);
    Ok(GenerateOutcome::Created(row))
}

/// Disambiguates slug collisions by numeric suffix: `-1`, `-2`, ...
async fn unique_slug(store: &dyn PostStore, base: &str) -> Result<String> {
    if !store.slug_exists(base).await? {
        return Ok(base.to_string());
    }
    let mut counter = 1u32;
    loop {
        let candidate = format!("{base}-{counter}");
        if !store.slug_exists(&candidate).await? {
            return Ok(candidate);
        }
        counter += 1;
    }
}

/// Regenerate mode for a single post, looked up by slug.
/// Title, slug, date and image are preserved; the failure surfaces to the
/// caller.
pub async fn regenerate_post(
    store: &dyn PostStore,
    llm: &dyn TextGenerator,
    slug: &str,
) -> Result<PostRow> {
    let post = store
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| anyhow!("no blog post with slug '{slug}'"))?;

    regenerate_content(store, llm, &post).await?;

    store
        .find_by_id(post.id)
        .await?
        .ok_or_else(|| anyhow!("post {} vanished during regeneration", post.id))
}

/// Re-runs generation + extraction for one existing post and overwrites its
/// body, excerpt and read-time in place.
async fn regenerate_content(
    store: &dyn PostStore,
    llm: &dyn TextGenerator,
    post: &PostRow,
) -> Result<()> {
    let weekday = Local::now().weekday().num_days_from_monday();
    let prompt = build_prompt(Some(&post.category), None, weekday);

    let raw = llm.complete(prompt.system, &prompt.user).await?;
    let generated = parse_reply(&raw, &post.category);

    store
        .update_content(
            post.id,
            &generated.content,
            &generated.excerpt,
            &generated.read_time,
        )
        .await?;

    info!(
        "regenerated content for '{}' ({} chars, {})",
        post.slug,
        generated.content.chars().count(),
        generated.read_time
    );
    Ok(())
}

/// Posts that qualify for bulk regeneration, without touching them.
pub async fn stale_posts(store: &dyn PostStore) -> Result<Vec<PostRow>> {
    store.find_stale(STALE_CONTENT_CHARS).await
}

/// Bulk regenerate mode: every post with a missing or under-length body,
/// one generation call at a time. Per-post failures are logged and counted
/// out of the success tally; the pass always runs to the end.
pub async fn regenerate_stale(
    store: &dyn PostStore,
    llm: &dyn TextGenerator,
) -> Result<BulkReport> {
    let posts = stale_posts(store).await?;
    let attempted = posts.len();
    let mut updated = 0;

    for post in &posts {
        match regenerate_content(store, llm, post).await {
            Ok(()) => updated += 1,
            Err(e) => warn!("regeneration failed for '{}': {e:#}", post.slug),
        }
    }

    Ok(BulkReport { attempted, updated })
}

/// Recomputes image URLs from the resolver for the selected posts.
/// Returns the number of posts updated.
pub async fn refresh_images(store: &dyn PostStore, scope: ImageScope) -> Result<usize> {
    let posts = match scope {
        ImageScope::All => store.all().await?,
        ImageScope::MissingOnly => store.find_missing_images().await?,
        ImageScope::Id(id) => {
            let post = store
                .find_by_id(id)
                .await?
                .ok_or_else(|| anyhow!("no blog post with id {id}"))?;
            vec![post]
        }
    };

    let mut updated = 0;
    for post in &posts {
        let image = image_url(&post.title, &post.category);
        store.update_image(post.id, &image).await?;
        updated += 1;
        info!("updated image for '{}'", post.slug);
    }
    Ok(updated)
}
