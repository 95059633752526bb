pub mod about;
pub mod blog;
pub mod contact;
pub mod experience;
pub mod health;
pub mod services;
pub mod technologies;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Blog (read-only; generation runs out-of-process via blogctl)
        .route("/api/blog/posts", get(blog::list_posts))
        .route("/api/blog/posts/featured", get(blog::featured_post))
        .route("/api/blog/posts/recent", get(blog::recent_posts))
        .route("/api/blog/posts/:key", get(blog::post_detail))
        // Static portfolio resources
        .route("/api/about/content", get(about::list_content))
        .route("/api/about/highlights", get(about::list_highlights))
        .route("/api/experience", get(experience::list_experiences))
        .route("/api/services", get(services::list_services))
        .route("/api/technologies", get(technologies::list_technologies))
        // Contact
        .route("/api/contact/info", get(contact::contact_info))
        .route("/api/contact/submissions", post(contact::submit))
        .with_state(state)
}
