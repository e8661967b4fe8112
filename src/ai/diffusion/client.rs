use super::device::{select_device, Device, DevicePreference, Precision};
use super::types::{HealthResponse, LoadPipelineRequest, TextToImageRequest, TextToImageResponse};
use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

/// Where a loaded pipeline lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedPipeline {
    pub device: Device,
    pub precision: Precision,
}

pub struct DiffusionImageClient {
    client: Client,
    base_url: String,
    model_id: String,
    device_preference: DevicePreference,
    pipeline: OnceCell<LoadedPipeline>,
}

impl DiffusionImageClient {
    pub fn new(
        base_url: String,
        model_id: String,
        device_preference: DevicePreference,
        client: Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id,
            device_preference,
            pipeline: OnceCell::new(),
        }
    }

    /// Load the pipeline on first use; later calls reuse the same handle.
    pub async fn pipeline(&self) -> Result<LoadedPipeline> {
        self.pipeline
            .get_or_try_init(|| self.load_pipeline())
            .await
            .copied()
    }

    async fn load_pipeline(&self) -> Result<LoadedPipeline> {
        let health: HealthResponse = self
            .send(self.client.get(format!("{}/health", self.base_url)))
            .await?;
        let (device, precision) = select_device(self.device_preference, health.cuda_available)?;

        tracing::info!(
            "Loading diffusion model {} on {} ({})",
            self.model_id,
            device,
            precision
        );

        let request = LoadPipelineRequest {
            model_id: self.model_id.clone(),
            device,
            dtype: precision,
        };
        let _: serde_json::Value = self
            .send(
                self.client
                    .post(format!("{}/v1/pipelines", self.base_url))
                    .json(&request),
            )
            .await?;

        Ok(LoadedPipeline { device, precision })
    }

    async fn send<Resp: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Resp> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to reach diffusion service: {}", e);
            e
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Diffusion service error (status {}): {}", status, error_text);
            return Err(Error::AiProvider(format!(
                "Diffusion service error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse diffusion response: {}", e);
            Error::AiProvider(format!("Failed to parse diffusion response: {}", e))
        })
    }
}

#[async_trait]
impl ImageGenerationService for DiffusionImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        self.pipeline().await?;
        tracing::debug!("Requesting one image from diffusion service");

        let request = TextToImageRequest {
            prompt: prompt.to_string(),
            num_images: 1,
        };
        let response: TextToImageResponse = self
            .send(
                self.client
                    .post(format!("{}/v1/txt2img", self.base_url))
                    .json(&request),
            )
            .await?;

        let encoded = response
            .images
            .first()
            .ok_or_else(|| Error::AiProvider("No image data in diffusion response".to_string()))?;

        use base64::Engine as _;
        Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
    }
}
