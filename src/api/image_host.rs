use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::api::Error;

/// Downloads building images referenced by map data.
#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// Fetches `url` and returns the body as standard base64. The response
    /// status and content type are not checked.
    pub async fn base64(&self, url: &str) -> Result<String, Error> {
        let response = self.inner.get(url).send().await.map_err(Error::Transport)?;
        let bytes = response.bytes().await.map_err(Error::Read)?;

        Ok(STANDARD.encode(bytes))
    }
}
