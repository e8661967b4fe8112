//! Party design image generation and storage
//!
//! Builds the image prompt, asks the diffusion service for one image and
//! writes it as PNG at a path derived from the occasion and color theme.

pub mod generator;
pub mod mock;
pub mod processor;

pub use generator::PartyImageGenerator;
pub use mock::MockImageProcessor;
pub use processor::ImageProcessor;

use crate::invitation::party_vars;
use crate::models::PartyRequest;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait ImageService: Send + Sync {
    /// Store encoded image bytes under `filename`, returning the written path.
    async fn save_image(&self, image_data: &[u8], filename: &str) -> Result<PathBuf>;
}

/// `generated_<occasion><color_theme>.png`, lowercased with every space removed.
///
/// Deterministic: the same pair always maps to the same file.
pub fn derive_image_filename(occasion: &str, color_theme: &str) -> String {
    format!(
        "generated_{}{}.png",
        occasion.to_lowercase(),
        color_theme.to_lowercase()
    )
    .replace(' ', "")
}

/// Only a bare file name may land in the output directory.
pub fn check_image_filename(filename: &str) -> Result<()> {
    if Path::new(filename).file_name().and_then(|n| n.to_str()) != Some(filename) {
        return Err(Error::Invariant(format!(
            "Image filename must not contain path components: {}",
            filename
        )));
    }
    Ok(())
}

/// Prompt for the party design image: decoration scene, then centerpiece close-up.
pub fn image_prompt(request: &PartyRequest) -> String {
    prompts::render(prompts::PARTY_IMAGE, &party_vars(request))
}
