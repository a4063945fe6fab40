//! Production Dog CEO API client.
//!
//! Implements the [`BreedDirectory`] trait over HTTPS using reqwest. The
//! server reports its own failures through the response envelope rather
//! than bare HTTP statuses, so every body goes through the envelope
//! decoder regardless of status code.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dtos::{decode_envelope, AllBreedsPayload, BreedImagesPayload, RandomImagePayload};
use super::{BreedDirectory, BreedMap, DirectoryError};

pub const DOG_API_BASE_URL: &str = "https://dog.ceo/api";

/// Endpoint templates for the Dog CEO API.
enum Endpoint<'a> {
    AllBreeds,
    BreedImages(&'a str),
    RandomImage(&'a str),
}

impl Endpoint<'_> {
    fn path(&self) -> String {
        match self {
            Endpoint::AllBreeds => "/breeds/list/all".to_string(),
            Endpoint::BreedImages(key) => format!("/breed/{key}/images"),
            Endpoint::RandomImage(key) => format!("/breed/{key}/images/random"),
        }
    }

    fn url(&self, base_url: &str) -> Result<Url, DirectoryError> {
        let raw = format!("{}{}", base_url, self.path());
        Url::parse(&raw).map_err(|_| DirectoryError::InvalidUrl(raw))
    }
}

/// Client for the Dog CEO breed directory.
pub struct DogApiClient {
    /// Base URL for the API
    base_url: String,
    /// Reusable HTTP client
    client: reqwest::Client,
}

impl DogApiClient {
    /// Create a new client with the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DOG_API_BASE_URL)
    }

    /// Create a new client with a custom base URL (used by tests to point
    /// at a local mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_enveloped<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<T, DirectoryError> {
        let url = endpoint.url(&self.base_url)?;
        debug!(%url, "directory request");
        let response = self.client.get(url).send().await?;
        let body = response.bytes().await?;
        decode_envelope(&body)
    }
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedDirectory for DogApiClient {
    async fn fetch_all_breeds(&self) -> Result<BreedMap, DirectoryError> {
        let payload: AllBreedsPayload = self.get_enveloped(Endpoint::AllBreeds).await?;
        Ok(payload.message)
    }

    async fn fetch_breed_images(&self, api_key: &str) -> Result<Vec<String>, DirectoryError> {
        let payload: BreedImagesPayload =
            self.get_enveloped(Endpoint::BreedImages(api_key)).await?;
        Ok(payload.message)
    }

    async fn fetch_random_image(&self, api_key: &str) -> Result<String, DirectoryError> {
        let payload: RandomImagePayload =
            self.get_enveloped(Endpoint::RandomImage(api_key)).await?;
        Ok(payload.message)
    }
}
