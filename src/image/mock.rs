use super::ImageService;
use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Records saves without touching the filesystem.
#[derive(Clone)]
pub struct MockImageProcessor {
    saved: Arc<Mutex<Vec<String>>>,
    base_path: PathBuf,
    should_fail: bool,
}

impl MockImageProcessor {
    pub fn new() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            base_path: PathBuf::from("/tmp"),
            should_fail: false,
        }
    }

    pub fn with_base_path(mut self, path: PathBuf) -> Self {
        self.base_path = path;
        self
    }

    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn get_save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn get_saved_filenames(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

impl Default for MockImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageService for MockImageProcessor {
    async fn save_image(&self, _image_data: &[u8], filename: &str) -> Result<PathBuf> {
        if self.should_fail {
            return Err(crate::Error::Io(std::io::Error::other("Mock failure")));
        }

        self.saved.lock().unwrap().push(filename.to_string());
        Ok(self.base_path.join(filename))
    }
}
