//! Music catalog lookup
//!
//! Finds the track a user named so the invitation can link and embed it.

pub mod client;
pub mod mock;
pub mod types;

pub use client::SpotifyClient;
pub use mock::MockCatalogClient;

use crate::models::Track;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogService: Send + Sync {
    /// First catalog match for a free-text song name, or `None` when nothing matches.
    async fn search_track(&self, query: &str) -> Result<Option<Track>>;
}
