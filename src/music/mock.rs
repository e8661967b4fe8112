use super::CatalogService;
use crate::models::Track;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockCatalogClient {
    tracks: Arc<Mutex<Vec<Track>>>,
    queries: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks are matched by case-insensitive substring of their name.
    pub fn with_track(self, track: Track) -> Self {
        self.tracks.lock().unwrap().push(track);
        self
    }

    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn get_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogService for MockCatalogClient {
    async fn search_track(&self, query: &str) -> Result<Option<Track>> {
        self.queries.lock().unwrap().push(query.to_string());

        if self.should_fail {
            return Err(Error::Catalog("Mock catalog failure".to_string()));
        }

        let needle = query.to_lowercase();
        Ok(self
            .tracks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name.to_lowercase().contains(&needle))
            .cloned())
    }
}
