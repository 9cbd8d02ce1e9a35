use std::time::Duration;

use crate::adapters::{CancelToken, ImageLister};
use crate::constants::{
    DEFAULT_API_ENDPOINT, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_PAGE_SIZE, ENV_API_ENDPOINT,
    ENV_API_TOKEN, USER_AGENT,
};
use crate::types::errors::{Error, ErrorKind, Result};

use super::images::{parse_image_list, Image, ImageListResponse};

/// Blocking HTTP client for the provider image API.
///
/// One logical listing walks `GET /images` page by page until the provider
/// stops advertising a `next_page`. There is no retry or backoff: a failed
/// page fails the whole listing.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    endpoint: String,
    token: Option<String>,
    page_size: u32,
}

impl Client {
    /// Create a client against `endpoint` (scheme and host, no trailing slash
    /// required). Fails only if the underlying HTTP client cannot be built.
    /// # Errors
    /// Returns a `Transport` error when TLS or client initialization fails.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint: String = endpoint.into();
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::new(ErrorKind::Transport, format!("building http client: {e}")))?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Create a client from `SNAPFORGE_API_ENDPOINT` / `SNAPFORGE_API_TOKEN`,
    /// falling back to the default public endpoint.
    /// # Errors
    /// Returns a `Transport` error when the HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENV_API_ENDPOINT)
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());
        let mut client = Self::new(endpoint)?;
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            if !token.is_empty() {
                client.token = Some(token);
            }
        }
        Ok(client)
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.page_size = per_page.max(1);
        self
    }

    fn fetch_page(&self, page: u32) -> Result<ImageListResponse> {
        let url = format!("{}/images", self.endpoint);
        let mut req = self
            .http
            .get(&url)
            .query(&[("page", page), ("per_page", self.page_size)]);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().map_err(|e| {
            Error::new(ErrorKind::Transport, format!("GET {url} page {page}: {e}"))
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::new(
                ErrorKind::Transport,
                format!("GET {url} page {page}: unexpected status {status}"),
            ));
        }
        let body = resp.text().map_err(|e| {
            Error::new(ErrorKind::Transport, format!("reading listing body: {e}"))
        })?;
        parse_image_list(&body)
    }
}

impl ImageLister for Client {
    fn list_images(&self, cancel: &CancelToken) -> Result<Vec<Image>> {
        let mut images = Vec::new();
        let mut page = 1u32;
        loop {
            if cancel.is_cancelled() {
                return Err(Error::new(ErrorKind::Cancelled, "image listing cancelled"));
            }
            let resp = self.fetch_page(page)?;
            let next = resp.next_page();
            images.extend(resp.images);
            match next {
                Some(next) => page = next,
                None => break,
            }
        }
        Ok(images)
    }
}
