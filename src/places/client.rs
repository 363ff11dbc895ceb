//! Paginated fetch against the upstream places API.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::places::Place;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid upstream base URL '{url}': {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for page {page} failed: {source}")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned {status} for page {page}")]
    Status { page: u32, status: StatusCode },

    #[error("undecodable body for page {page}: {source}")]
    Decode {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
}

/// One page of the upstream response.
#[derive(Debug, Deserialize)]
struct PlacesPage {
    results: Vec<Place>,
    #[serde(default)]
    next: Option<String>,
}

impl PlacesPage {
    fn has_next(&self) -> bool {
        matches!(&self.next, Some(next) if !next.is_empty())
    }
}

/// Client for the paginated upstream places API.
pub struct PlacesClient {
    http: reqwest::Client,
    base_url: Url,
    start_page: u32,
}

impl PlacesClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| FetchError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http,
            base_url,
            start_page: config.start_page,
        })
    }

    /// Fetch every page, concatenating results in response order.
    ///
    /// Walks `page = start_page, start_page + 1, …` until the upstream
    /// reports an empty `next`. Any per-page failure aborts the whole fetch.
    pub async fn fetch_all(&self) -> Result<Vec<Place>, FetchError> {
        let mut places = Vec::new();
        let mut page = self.start_page;

        loop {
            let body = self.fetch_page(page).await?;
            let has_next = body.has_next();
            places.extend(body.results);

            if !has_next {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            places = places.len(),
            pages = page - self.start_page + 1,
            "Upstream fetch complete"
        );
        Ok(places)
    }

    async fn fetch_page(&self, page: u32) -> Result<PlacesPage, FetchError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Request { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { page, status });
        }

        response
            .json()
            .await
            .map_err(|source| FetchError::Decode { page, source })
    }
}
