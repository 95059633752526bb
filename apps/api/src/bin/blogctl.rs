//! Operator CLI for the blog generation pipeline.
//!
//! Intended to run as one process per scheduled trigger (e.g. a daily cron
//! entry running `blogctl generate`). Hard failures exit non-zero so an
//! outer scheduler can alert; bulk per-item failures are logged and
//! summarized instead.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_api::config::Config;
use portfolio_api::db::{create_pool, run_migrations};
use portfolio_api::generation::generator::{
    existing_post_for_today, generate_daily_post, refresh_images, regenerate_post,
    regenerate_stale, stale_posts, GenerateOptions, GenerateOutcome, ImageScope,
};
use portfolio_api::llm_client::{GenerationError, GroqClient};
use portfolio_api::store::{PgPostStore, PostStore};

#[derive(Parser)]
#[command(name = "blogctl", about = "Manage AI-generated blog posts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate today's blog post
    Generate {
        /// Category for the blog post (React, Django, AWS, ...)
        #[arg(long)]
        category: Option<String>,
        /// Specific topic for the blog post
        #[arg(long)]
        topic: Option<String>,
        /// Generate even if a post already exists for today
        #[arg(long)]
        force: bool,
    },
    /// Regenerate content for posts that are missing it
    Regenerate {
        /// Regenerate one post by slug
        #[arg(long)]
        slug: Option<String>,
        /// Regenerate every post with missing or under-length content
        #[arg(long)]
        all: bool,
    },
    /// Recompute image URLs from the image resolver
    UpdateImages {
        /// Update every post
        #[arg(long)]
        all: bool,
        /// Update one post by id
        #[arg(long)]
        id: Option<i64>,
    },
    /// Delete all blog posts
    DeleteAll {
        /// Required to actually delete
        #[arg(long)]
        confirm: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("portfolio_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    let store = PgPostStore::new(pool);

    match cli.command {
        Command::Generate {
            category,
            topic,
            force,
        } => {
            println!("Starting daily blog post generation...");

            // Settle the one-post-per-day skip before touching the client,
            // so an unconfigured cron still exits cleanly on skip days.
            if !force {
                if let Some(existing) = existing_post_for_today(&store).await? {
                    println!("Blog post already exists for today: {}", existing.title);
                    println!("Use --force to generate a new post anyway.");
                    return Ok(());
                }
            }

            let llm = build_client(&config)?;
            let options = GenerateOptions {
                category,
                topic,
                force,
            };
            match generate_daily_post(&store, &llm, &options).await? {
                GenerateOutcome::Skipped { existing_title } => {
                    println!("Blog post already exists for today: {existing_title}");
                    println!("Use --force to generate a new post anyway.");
                }
                GenerateOutcome::Created(post) => {
                    println!("Successfully generated blog post: \"{}\"", post.title);
                    println!("  Category: {}", post.category);
                    println!("  Read time: {}", post.read_time);
                    println!("  Slug: {}", post.slug);
                }
            }
        }

        Command::Regenerate { slug, all } => {
            if let Some(slug) = slug {
                let llm = build_client(&config)?;
                println!("Regenerating content for '{slug}'...");
                let post = regenerate_post(&store, &llm, &slug).await?;
                println!("Successfully regenerated content for: \"{}\"", post.title);
                println!("  Content length: {} characters", post.content.chars().count());
                println!("  Read time: {}", post.read_time);
            } else if all {
                let llm = build_client(&config)?;
                println!("Regenerating blog post content...");
                let report = regenerate_stale(&store, &llm).await?;
                println!(
                    "Successfully regenerated content for {} of {} blog post(s)",
                    report.updated, report.attempted
                );
            } else {
                // Report-only: list the posts that would be regenerated
                let posts = stale_posts(&store).await?;
                if posts.is_empty() {
                    println!("No blog posts missing content found.");
                } else {
                    println!("Found {} blog post(s) missing content:", posts.len());
                    for post in &posts {
                        println!("  - {}: \"{}\"", post.slug, post.title);
                    }
                }
                println!("Use --all to regenerate all or --slug <slug> for a specific post.");
            }
        }

        Command::UpdateImages { all, id } => {
            println!("Updating blog post images...");
            let scope = match (id, all) {
                (Some(id), _) => ImageScope::Id(id),
                (None, true) => ImageScope::All,
                (None, false) => ImageScope::MissingOnly,
            };
            let updated = refresh_images(&store, scope).await?;
            if updated == 0 && matches!(scope, ImageScope::MissingOnly) {
                println!("No blog posts with empty images found.");
                println!("Use --all to update all posts or --id <id> for a specific post.");
            } else {
                println!("Successfully updated {updated} blog post(s)");
            }
        }

        Command::DeleteAll { confirm } => {
            let count = store.count().await?;
            if !confirm {
                println!("This will delete {count} blog post(s).");
                println!("Use --confirm to actually delete all blog posts.");
            } else {
                let deleted = store.delete_all().await?;
                println!("Successfully deleted {deleted} blog post(s)");
            }
        }
    }

    Ok(())
}

/// Constructs the generation client, turning a missing credential into an
/// operator-facing configuration error before any network or DB write.
fn build_client(config: &Config) -> Result<GroqClient> {
    GroqClient::new(config.groq_api_key.clone(), config.groq_model.clone()).map_err(|e| {
        if matches!(e, GenerationError::MissingApiKey) {
            eprintln!("Configuration error: {e}");
            eprintln!("Set GROQ_API_KEY in the environment or a .env file.");
        }
        e.into()
    })
}
