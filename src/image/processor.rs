use super::{check_image_filename, ImageService};
use crate::{Error, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

pub struct ImageProcessor {
    output_dir: PathBuf,
}

impl ImageProcessor {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    fn save_png_sync(image: DynamicImage, output_dir: PathBuf, path: PathBuf) -> Result<()> {
        std::fs::create_dir_all(&output_dir)?;
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    async fn save_png(&self, image: DynamicImage, path: &Path) -> Result<()> {
        tokio::task::spawn_blocking({
            let output_dir = self.output_dir.clone();
            let path = path.to_path_buf();
            move || Self::save_png_sync(image, output_dir, path)
        })
        .await
        .map_err(|e| Error::Invariant(format!("Image save task join error: {}", e)))?
    }
}

#[async_trait]
impl ImageService for ImageProcessor {
    async fn save_image(&self, image_data: &[u8], filename: &str) -> Result<PathBuf> {
        check_image_filename(filename)?;

        let img = image::load_from_memory(image_data)?;
        let path = self.output_dir.join(filename);

        self.save_png(img, &path).await?;
        tracing::info!("Saved party image to {}", path.display());

        Ok(path)
    }
}
