//! Request/response payloads for the diffusion inference service.

use super::device::{Device, Precision};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub cuda_available: bool,
}

#[derive(Debug, Serialize)]
pub struct LoadPipelineRequest {
    pub model_id: String,
    pub device: Device,
    pub dtype: Precision,
}

#[derive(Debug, Serialize)]
pub struct TextToImageRequest {
    pub prompt: String,
    pub num_images: u32,
}

/// Images come back base64 encoded.
#[derive(Debug, Deserialize)]
pub struct TextToImageResponse {
    pub images: Vec<String>,
}
