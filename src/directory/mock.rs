//! Mock breed directory for testing.
//!
//! Provides a configurable in-memory [`BreedDirectory`] that serves
//! scripted data and records call counts, allowing tests to verify the
//! resolver's caching behavior without network access.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{BreedDirectory, BreedMap, DirectoryError};

#[derive(Debug, Default)]
struct MockState {
    all_breeds: BreedMap,
    images: HashMap<String, Vec<String>>,
    /// Random-image responses per breed, consumed front to back
    random_images: HashMap<String, VecDeque<String>>,
    /// API keys whose image-list fetch fails with a 404 envelope
    failing_images: HashSet<String>,
    all_breeds_calls: usize,
    image_calls: HashMap<String, usize>,
    random_calls: HashMap<String, usize>,
}

/// Mock breed directory.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the resolver owns another.
#[derive(Debug, Clone, Default)]
pub struct MockBreedDirectory {
    state: Arc<Mutex<MockState>>,
}

impl MockBreedDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full breed map served by `fetch_all_breeds`.
    pub fn set_all_breeds(&self, breeds: BreedMap) {
        self.state.lock().unwrap().all_breeds = breeds;
    }

    /// Set the image list served for an API key. Clears any scripted
    /// failure for that key.
    pub fn set_breed_images(&self, api_key: &str, images: Vec<String>) {
        let mut state = self.state.lock().unwrap();
        state.failing_images.remove(api_key);
        state.images.insert(api_key.to_string(), images);
    }

    /// Make `fetch_breed_images` fail for an API key with a 404 envelope
    /// error until `set_breed_images` is called for it again.
    pub fn fail_breed_images(&self, api_key: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_images
            .insert(api_key.to_string());
    }

    /// Queue a random-image response for an API key. Each fetch consumes
    /// one queued value.
    pub fn queue_random_image(&self, api_key: &str, url: &str) {
        self.state
            .lock()
            .unwrap()
            .random_images
            .entry(api_key.to_string())
            .or_default()
            .push_back(url.to_string());
    }

    /// Number of `fetch_all_breeds` calls made so far.
    pub fn all_breeds_calls(&self) -> usize {
        self.state.lock().unwrap().all_breeds_calls
    }

    /// Number of `fetch_breed_images` calls made for an API key.
    pub fn image_calls(&self, api_key: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .image_calls
            .get(api_key)
            .copied()
            .unwrap_or(0)
    }

    /// Number of `fetch_random_image` calls made for an API key.
    pub fn random_calls(&self, api_key: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .random_calls
            .get(api_key)
            .copied()
            .unwrap_or(0)
    }

    fn not_found(api_key: &str) -> DirectoryError {
        DirectoryError::Response {
            message: format!("Breed not found ({api_key})"),
            status: "error".to_string(),
            code: 404,
        }
    }
}

#[async_trait]
impl BreedDirectory for MockBreedDirectory {
    async fn fetch_all_breeds(&self) -> Result<BreedMap, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        state.all_breeds_calls += 1;
        Ok(state.all_breeds.clone())
    }

    async fn fetch_breed_images(&self, api_key: &str) -> Result<Vec<String>, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        *state.image_calls.entry(api_key.to_string()).or_insert(0) += 1;
        if state.failing_images.contains(api_key) {
            return Err(Self::not_found(api_key));
        }
        state
            .images
            .get(api_key)
            .cloned()
            .ok_or_else(|| Self::not_found(api_key))
    }

    async fn fetch_random_image(&self, api_key: &str) -> Result<String, DirectoryError> {
        let mut state = self.state.lock().unwrap();
        *state.random_calls.entry(api_key.to_string()).or_insert(0) += 1;
        state
            .random_images
            .get_mut(api_key)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| Self::not_found(api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_scripted_breeds() {
        let mock = MockBreedDirectory::new();
        let mut breeds = BreedMap::new();
        breeds.insert("pug".to_string(), vec![]);
        mock.set_all_breeds(breeds);

        let result = mock.fetch_all_breeds().await.unwrap();
        assert!(result.contains_key("pug"));
        assert_eq!(mock.all_breeds_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_random_queue_is_consumed_in_order() {
        let mock = MockBreedDirectory::new();
        mock.queue_random_image("pug", "https://example.com/1.jpg");
        mock.queue_random_image("pug", "https://example.com/2.jpg");

        assert_eq!(
            mock.fetch_random_image("pug").await.unwrap(),
            "https://example.com/1.jpg"
        );
        assert_eq!(
            mock.fetch_random_image("pug").await.unwrap(),
            "https://example.com/2.jpg"
        );
        assert!(mock.fetch_random_image("pug").await.is_err());
        assert_eq!(mock.random_calls("pug"), 3);
    }

    #[tokio::test]
    async fn test_mock_image_failure_can_be_cleared() {
        let mock = MockBreedDirectory::new();
        mock.fail_breed_images("pug");
        assert!(mock.fetch_breed_images("pug").await.is_err());

        mock.set_breed_images("pug", vec!["https://example.com/1.jpg".to_string()]);
        assert_eq!(mock.fetch_breed_images("pug").await.unwrap().len(), 1);
        assert_eq!(mock.image_calls("pug"), 2);
    }
}
