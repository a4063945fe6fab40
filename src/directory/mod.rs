//! Breed directory capability.
//!
//! The resolver consumes breed data through the [`BreedDirectory`] trait,
//! enabling dependency injection and mocking in tests. The production
//! implementation is [`DogApiClient`]; tests use
//! [`mock::MockBreedDirectory`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod dtos;
pub mod mock;

pub use client::{DogApiClient, DOG_API_BASE_URL};
pub use dtos::ErrorBody;

/// All breeds, keyed by parent breed, each with its (possibly empty) list
/// of sub-breed keys.
pub type BreedMap = BTreeMap<String, Vec<String>>;

/// Errors surfaced by directory calls.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Endpoint URL construction failed
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
    /// The server returned a structured error envelope
    #[error("directory error (code {code}): {message}")]
    Response {
        message: String,
        status: String,
        code: i64,
    },
    /// The payload did not match the expected shape
    #[error("failed to decode directory response: {0}")]
    Decode(String),
    /// Network-level failure
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::Decode(e.to_string())
    }
}

impl DirectoryError {
    /// Build a `Response` error from a decoded error envelope.
    pub(crate) fn from_error_body(body: ErrorBody) -> Self {
        DirectoryError::Response {
            message: body.message,
            status: body.status,
            code: body.code,
        }
    }
}

/// Trait for breed directory operations.
///
/// Implementations are expected to be stateless per call: the resolver owns
/// all caching, so every invocation here reaches the underlying source.
#[async_trait]
pub trait BreedDirectory: Send + Sync {
    /// List all breeds, grouped by parent breed.
    async fn fetch_all_breeds(&self) -> Result<BreedMap, DirectoryError>;

    /// List image URLs for a breed.
    ///
    /// # Arguments
    /// * `api_key` - breed path segment, e.g. `"terrier/toy"`
    async fn fetch_breed_images(&self, api_key: &str) -> Result<Vec<String>, DirectoryError>;

    /// Fetch one random image URL for a breed.
    async fn fetch_random_image(&self, api_key: &str) -> Result<String, DirectoryError>;
}
