use super::{ChatService, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Chat double that records every user prompt it receives.
#[derive(Clone, Default)]
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(user.to_string());

        if self.should_fail {
            return Err(Error::AiProvider("Mock chat failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("You are invited to a mock party!".to_string())
        } else {
            let index = (prompts.len() - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// Image double returning canned bytes (a 1x1 PNG by default).
#[derive(Clone, Default)]
pub struct MockImageGenerationClient {
    image_responses: Arc<Mutex<Vec<Vec<u8>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.image_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());

        if self.should_fail {
            return Err(Error::AiProvider("Mock inference failure".to_string()));
        }

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            tiny_png()
        } else {
            let index = (prompts.len() - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// A valid 1x1 PNG.
fn tiny_png() -> Result<Vec<u8>> {
    let pixel = image::RgbImage::from_pixel(1, 1, image::Rgb([212, 175, 55]));
    let mut bytes = Vec::new();
    pixel.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}
