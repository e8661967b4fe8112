//! Party designer - turns a few party-planning answers into an invitation
//!
//! Writes the invitation text with a chat model (falling back to a fixed
//! template), renders a party design image with a local diffusion service,
//! and looks up an optional song in the Spotify catalog.

pub mod ai;
pub mod app;
pub mod error;
pub mod image;
pub mod invitation;
pub mod models;
pub mod music;
pub mod prompts;
pub mod render;

pub use error::{Error, Result};
