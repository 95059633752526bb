//! Backend for a personal portfolio site: read-mostly REST resources
//! (about, experience, services, technologies, contact) plus a blog that
//! can be auto-populated by a scheduled AI generation pipeline.
//!
//! The HTTP server lives in `src/main.rs`; the generation pipeline is
//! driven by the `blogctl` binary (one process per scheduled trigger).

pub mod config;
pub mod db;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
