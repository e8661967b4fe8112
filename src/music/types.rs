//! Spotify Web API payloads.

use crate::models::Track;
use serde::Deserialize;

/// Client-credentials token response. A body without `access_token` is tolerated.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

/// A body missing `tracks` or `items` reads as an empty page.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: TrackPage,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistItem>,
    pub album: AlbumItem,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub struct ArtistItem {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AlbumItem {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

impl From<TrackItem> for Track {
    fn from(item: TrackItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            artists: item.artists.into_iter().map(|a| a.name).collect(),
            album: item.album.name,
            external_url: item.external_urls.spotify,
        }
    }
}
