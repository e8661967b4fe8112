//! Invitation text generation
//!
//! The chat model writes the invitation when a credential is configured.
//! Any failure degrades to a fixed template; callers always get text back.

use crate::ai::ChatService;
use crate::models::PartyRequest;
use crate::prompts;
use tracing::{info, warn};

pub struct InvitationWriter {
    chat: Option<Box<dyn ChatService>>,
}

impl InvitationWriter {
    /// `None` means no credential was configured or the client could not be built.
    pub fn new(chat: Option<Box<dyn ChatService>>) -> Self {
        Self { chat }
    }

    pub fn is_model_backed(&self) -> bool {
        self.chat.is_some()
    }

    pub async fn write(&self, request: &PartyRequest) -> String {
        let fallback = fallback_invitation(request);

        let Some(chat) = &self.chat else {
            info!("No chat credential configured, using fallback invitation");
            return fallback;
        };

        let prompt = compose_prompt(request);
        match chat.complete(prompts::INVITATION_SYSTEM, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Chat model returned an empty invitation, using fallback");
                fallback
            }
            Err(e) => {
                warn!("Invitation generation failed, using fallback: {}", e);
                fallback
            }
        }
    }
}

pub(crate) fn party_vars(request: &PartyRequest) -> [(&'static str, &str); 3] {
    [
        ("occasion", request.occasion()),
        ("color_theme", request.color_theme()),
        ("location", request.location()),
    ]
}

pub fn fallback_invitation(request: &PartyRequest) -> String {
    prompts::render(prompts::INVITATION_FALLBACK, &party_vars(request))
}

pub fn compose_prompt(request: &PartyRequest) -> String {
    let mut prompt = prompts::render(prompts::INVITATION_USER, &party_vars(request));
    if request.wants_musical_performance() {
        prompt.push('\n');
        prompt.push_str(prompts::MUSICAL_PERFORMANCE);
    }
    prompt
}
