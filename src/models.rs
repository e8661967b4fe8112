//! Data models and structures
//!
//! Defines the party request flowing through the pipeline, the results it
//! produces, and the environment-driven configuration.

use crate::ai::diffusion::DevicePreference;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const MISSING_FIELDS_NOTICE: &str = "Please fill in all fields.";
pub const NO_TRACK_NOTICE: &str = "No track found. Try a different song name.";

/// Raw form input, exactly as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct PartyForm {
    pub occasion: String,
    pub color_theme: String,
    pub location: String,
    pub musical_performance: bool,
    pub song_name: String,
}

impl PartyForm {
    /// Run the required-field check and produce a request.
    ///
    /// Occasion, color theme and location must be non-blank. A blank song
    /// name means no track lookup.
    pub fn validate(self) -> Result<PartyRequest> {
        let required = [&self.occasion, &self.color_theme, &self.location];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(Error::Validation(MISSING_FIELDS_NOTICE.to_string()));
        }

        let song_query = Some(self.song_name.trim().to_string()).filter(|s| !s.is_empty());

        Ok(PartyRequest {
            occasion: self.occasion,
            color_theme: self.color_theme,
            location: self.location,
            wants_musical_performance: self.musical_performance,
            song_query,
        })
    }
}

/// A validated party request. Only obtainable through [`PartyForm::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRequest {
    occasion: String,
    color_theme: String,
    location: String,
    wants_musical_performance: bool,
    song_query: Option<String>,
}

impl PartyRequest {
    pub fn occasion(&self) -> &str {
        &self.occasion
    }

    pub fn color_theme(&self) -> &str {
        &self.color_theme
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn wants_musical_performance(&self) -> bool {
        self.wants_musical_performance
    }

    pub fn song_query(&self) -> Option<&str> {
        self.song_query.as_deref()
    }
}

/// A catalog track, as returned by the first search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: String,
    pub external_url: String,
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists.join(", ")
    }

    pub fn embed_url(&self) -> String {
        format!("https://open.spotify.com/embed/track/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    NotRequested,
    NotFound,
    Found(Track),
}

/// One pipeline result, handed out as soon as its step finishes.
#[derive(Debug, Clone, Copy)]
pub enum PlanStep<'a> {
    Invitation(&'a str),
    Image(&'a Path),
    Track(&'a TrackOutcome),
}

/// Everything one submission produced.
#[derive(Debug, Clone)]
pub struct PartyPlan {
    pub request: PartyRequest,
    pub invitation: String,
    pub image_path: PathBuf,
    pub track: TrackOutcome,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub chat_max_tokens: u32,
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub spotify_accounts_url: String,
    pub spotify_api_url: String,
    pub diffusion_url: String,
    pub diffusion_model: String,
    pub diffusion_device: DevicePreference,
    pub output_dir: PathBuf,
    pub post_inference_delay: Duration,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com".to_string(),
            chat_model: "gpt-4".to_string(),
            chat_max_tokens: 500,
            spotify_client_id: None,
            spotify_client_secret: None,
            spotify_accounts_url: "https://accounts.spotify.com".to_string(),
            spotify_api_url: "https://api.spotify.com".to_string(),
            diffusion_url: "http://127.0.0.1:7860".to_string(),
            diffusion_model: "SG161222/Realistic_Vision_V5.1_noVAE".to_string(),
            diffusion_device: DevicePreference::Auto,
            output_dir: PathBuf::from("generated_images"),
            post_inference_delay: Duration::ZERO,
            http_timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            chat_model: var("CHAT_MODEL").unwrap_or(defaults.chat_model),
            chat_max_tokens: parse_var(&var, "CHAT_MAX_TOKENS")?
                .unwrap_or(defaults.chat_max_tokens),
            spotify_client_id: var("SPOTIFY_CLIENT_ID"),
            spotify_client_secret: var("SPOTIFY_CLIENT_SECRET"),
            spotify_accounts_url: var("SPOTIFY_ACCOUNTS_URL")
                .unwrap_or(defaults.spotify_accounts_url),
            spotify_api_url: var("SPOTIFY_API_URL").unwrap_or(defaults.spotify_api_url),
            diffusion_url: var("DIFFUSION_URL").unwrap_or(defaults.diffusion_url),
            diffusion_model: var("DIFFUSION_MODEL").unwrap_or(defaults.diffusion_model),
            diffusion_device: parse_var(&var, "DIFFUSION_DEVICE")?
                .unwrap_or(defaults.diffusion_device),
            output_dir: var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            post_inference_delay: parse_var::<u64, _>(&var, "POST_INFERENCE_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.post_inference_delay),
            http_timeout: parse_var::<u64, _>(&var, "HTTP_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        })
    }
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| Error::Config(format!("{} has invalid value '{}': {}", key, raw, e)))
        })
        .transpose()
}
