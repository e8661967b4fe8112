use super::{check_image_filename, derive_image_filename, image_prompt, ImageService};
use crate::ai::ImageGenerationService;
use crate::models::PartyRequest;
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Prompt → one diffusion image → PNG on disk. Failures are not caught here.
pub struct PartyImageGenerator {
    image_gen: Box<dyn ImageGenerationService>,
    store: Box<dyn ImageService>,
    post_inference_delay: Duration,
}

impl PartyImageGenerator {
    pub fn new(
        image_gen: Box<dyn ImageGenerationService>,
        store: Box<dyn ImageService>,
        post_inference_delay: Duration,
    ) -> Self {
        Self {
            image_gen,
            store,
            post_inference_delay,
        }
    }

    pub async fn generate(&self, request: &PartyRequest) -> Result<PathBuf> {
        let filename = derive_image_filename(request.occasion(), request.color_theme());
        check_image_filename(&filename)?;

        let prompt = image_prompt(request);
        let image_data = self.image_gen.generate_image(&prompt).await?;
        info!("Generated party image ({} bytes)", image_data.len());

        if !self.post_inference_delay.is_zero() {
            tokio::time::sleep(self.post_inference_delay).await;
        }

        self.store.save_image(&image_data, &filename).await
    }
}
