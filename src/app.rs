//! Application orchestration for a single party submission.

use crate::ai::{ChatService, DiffusionImageClient, OpenAiChatClient};
use crate::image::{ImageProcessor, PartyImageGenerator};
use crate::invitation::InvitationWriter;
use crate::models::{Config, PartyForm, PartyPlan, PartyRequest, PlanStep, TrackOutcome};
use crate::music::{CatalogService, SpotifyClient};
use crate::{Error, Result};
use tracing::{error, info, warn};

/// Runs the invitation, image and track steps one after another.
pub struct App {
    invitation: InvitationWriter,
    image: PartyImageGenerator,
    catalog: Option<Box<dyn CatalogService>>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub invitation: InvitationWriter,
    pub image: PartyImageGenerator,
    pub catalog: Option<Box<dyn CatalogService>>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            invitation: services.invitation,
            image: services.image,
            catalog: services.catalog,
        }
    }

    /// Construct an app from configuration (see `Config::from_env`).
    pub fn new(config: &Config) -> Result<Self> {
        let chat = chat_service(config, || http_client(config));

        // Diffusion and Spotify share one connection pool.
        let http_client = http_client(config)?;

        let image_gen = DiffusionImageClient::new(
            config.diffusion_url.clone(),
            config.diffusion_model.clone(),
            config.diffusion_device,
            http_client.clone(),
        );
        let image = PartyImageGenerator::new(
            Box::new(image_gen),
            Box::new(ImageProcessor::new(&config.output_dir)),
            config.post_inference_delay,
        );

        let catalog: Option<Box<dyn CatalogService>> =
            match (&config.spotify_client_id, &config.spotify_client_secret) {
                (Some(id), Some(secret)) => Some(Box::new(SpotifyClient::new(
                    id.clone(),
                    secret.clone(),
                    config.spotify_accounts_url.clone(),
                    config.spotify_api_url.clone(),
                    http_client,
                ))),
                _ => {
                    info!("Spotify credentials not set - song lookup unavailable");
                    None
                }
            };

        Ok(Self::with_services(AppServices {
            invitation: InvitationWriter::new(chat),
            image,
            catalog,
        }))
    }

    /// Validate raw form input, then run the pipeline.
    ///
    /// A form missing required fields never reaches any external service.
    pub async fn submit(&self, form: PartyForm) -> Result<PartyPlan> {
        self.submit_with(form, |_| {}).await
    }

    /// Like [`App::submit`], reporting each result through `on_step` as soon
    /// as it exists. A later failure leaves the earlier steps reported.
    pub async fn submit_with<F>(&self, form: PartyForm, on_step: F) -> Result<PartyPlan>
    where
        F: FnMut(PlanStep<'_>) + Send,
    {
        let request = form.validate().map_err(|e| {
            warn!("Rejected party form: {}", e);
            e
        })?;
        self.run_with(request, on_step).await
    }

    pub async fn run(&self, request: PartyRequest) -> Result<PartyPlan> {
        self.run_with(request, |_| {}).await
    }

    pub async fn run_with<F>(&self, request: PartyRequest, mut on_step: F) -> Result<PartyPlan>
    where
        F: FnMut(PlanStep<'_>) + Send,
    {
        let lookup = match (request.song_query(), &self.catalog) {
            (Some(query), Some(catalog)) => Some((query.to_string(), catalog.as_ref())),
            (Some(_), None) => {
                return Err(Error::Config(
                    "SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET must be set to look up songs"
                        .to_string(),
                ));
            }
            (None, _) => None,
        };

        info!(
            "Designing {} party ({} theme, {})",
            request.occasion(),
            request.color_theme(),
            request.location()
        );

        info!("Generating invitation...");
        let invitation = self.invitation.write(&request).await;
        on_step(PlanStep::Invitation(&invitation));

        info!("Creating party design image...");
        let image_path = self.image.generate(&request).await?;
        on_step(PlanStep::Image(&image_path));

        let track = match lookup {
            Some((query, catalog)) => lookup_track(catalog, &query).await?,
            None => TrackOutcome::NotRequested,
        };
        on_step(PlanStep::Track(&track));

        Ok(PartyPlan {
            request,
            invitation,
            image_path,
            track,
        })
    }
}

fn http_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
}

/// The chat backend, or `None` when invitations must use the fallback template.
///
/// `build_client` only runs when an API key is configured.
fn chat_service<B>(config: &Config, build_client: B) -> Option<Box<dyn ChatService>>
where
    B: FnOnce() -> reqwest::Result<reqwest::Client>,
{
    let Some(api_key) = &config.openai_api_key else {
        info!("OPENAI_API_KEY not set - invitations will use the fallback template");
        return None;
    };

    match build_client() {
        Ok(client) => {
            info!("Chat provider: OpenAI (model: {})", config.chat_model);
            Some(Box::new(OpenAiChatClient::new(
                api_key.clone(),
                config.openai_base_url.clone(),
                config.chat_model.clone(),
                config.chat_max_tokens,
                client,
            )))
        }
        Err(e) => {
            error!("Failed to initialize OpenAI client: {}", e);
            None
        }
    }
}

async fn lookup_track(catalog: &dyn CatalogService, query: &str) -> Result<TrackOutcome> {
    info!("Looking up song '{}'", query);
    match catalog.search_track(query).await? {
        Some(track) => {
            info!("Found track {} by {}", track.name, track.artist_names());
            Ok(TrackOutcome::Found(track))
        }
        None => {
            info!("No track matched '{}'", query);
            Ok(TrackOutcome::NotFound)
        }
    }
}
