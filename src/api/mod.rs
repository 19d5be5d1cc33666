use serde::{Deserialize, Serialize};

pub mod image_host;
pub mod map_service;
pub mod service;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    /// min-lon, min-lat, max-lon, max-lat
    pub bbox: [f64; 4],
    /// Base64 encoded photo.
    pub photo: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub start_date: String,
    pub architect: String,
    pub description: String,
    pub image: String,
    pub name: String,
}

/// Failure of an outbound call to the map service or an image host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is not a valid url: {1}")]
    Url(String, String),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("error reading response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}
