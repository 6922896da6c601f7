use reqwest::{Client, Response};

use crate::error::{OmdbError, Result};
use crate::models::OmdbMovie;

pub const BASE_URL: &str = "https://www.omdbapi.com/";

/// Looks movies up by title. One request per call, no retries.
#[derive(Clone, Debug)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
}

impl Default for OmdbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OmdbClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            base_url: BASE_URL.to_owned(),
        }
    }

    /// Points the client at another host, e.g. a local stand-in.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the payload OMDb returns for `title`.
    ///
    /// A "not found" answer still arrives as a 200 and is returned as-is;
    /// check [`OmdbMovie::is_found`] or convert it into a draft.
    pub async fn fetch_movie(&self, title: &str, api_key: &str) -> Result<OmdbMovie> {
        tracing::debug!(title, "Fetching movie from OMDb");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("t", title), ("apikey", api_key)])
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<OmdbMovie> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "OMDb returned an error status");
            return Err(OmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
