use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{StatusCode, Url};

use super::types::*;
use crate::api::{Building, Error};

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(inner: reqwest::Client, base: &str) -> Result<Self, Error> {
        let base = base
            .parse::<Url>()
            .map_err(|e| Error::Url(base.to_string(), e.to_string()))?;

        Ok(Self { inner, base })
    }

    /// Buildings inside `bbox` that carry a description, architect, image and start date.
    pub async fn buildings(&self, bbox: [f64; 4]) -> Result<Vec<Building>, Error> {
        let mut url = self.base.clone();
        url.set_query(Some(&bbox_query(bbox)));

        let response = self
            .inner
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(Error::Transport)?;

        if response.status() != StatusCode::OK {
            return Err(Error::Status(response.status()));
        }

        let body = response.bytes().await.map_err(Error::Read)?;
        let map: MapResponse = serde_json::from_slice(&body)?;

        Ok(map.buildings())
    }
}

fn bbox_query([min_lon, min_lat, max_lon, max_lat]: [f64; 4]) -> String {
    format!("bbox={min_lon:.6},{min_lat:.6},{max_lon:.6},{max_lat:.6}")
}
