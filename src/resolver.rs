//! Section resolution core.
//!
//! [`SectionResolver`] owns the breed data, the alphabetical category
//! partition, the multi-level selection state, and the per-breed image
//! caches, and resolves all of it into an ordered section/item mapping for
//! a presentation layer to render.
//!
//! The resolver is a single-owner state machine: callers are expected to
//! serialize selection mutations and `resolve` calls. Every cache slot is
//! written only after its fetch has fully completed, so a failed or
//! cancelled `resolve` leaves previously cached entries untouched and the
//! next call retries exactly the missing pieces.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use reqwest::Url;
use tracing::{debug, info};

use crate::directory::{BreedDirectory, BreedMap, DirectoryError};
use crate::models::{Breed, Category, DogImage, Item, Section, SectionMap};

/// The category selected when a resolver is created or data first loads.
pub const DEFAULT_CATEGORY: &str = "a-c";

/// Maximum number of images shown per selected breed.
pub const IMAGE_SECTION_LIMIT: usize = 8;

/// Contiguous letter ranges covering `a`-`z`.
const CATEGORY_RANGES: [(char, char); 7] = [
    ('a', 'c'),
    ('d', 'f'),
    ('g', 'i'),
    ('j', 'k'),
    ('l', 'n'),
    ('o', 'r'),
    ('s', 'z'),
];

static CATEGORY_LIST: Lazy<Vec<Category>> = Lazy::new(|| {
    CATEGORY_RANGES
        .iter()
        .map(|&(lo, hi)| Category {
            name: format!("{lo}-{hi}"),
            range: lo..=hi,
            is_selected: false,
        })
        .collect()
});

/// The seven fixed categories, unselected.
pub fn category_list() -> &'static [Category] {
    &CATEGORY_LIST
}

/// Stateful core resolving breed data and selection state into sections.
///
/// The breed list and category index are fetched once and cached for the
/// resolver's lifetime; refreshing them means constructing a new resolver.
pub struct SectionResolver<D> {
    directory: D,
    breed_list: Vec<Breed>,
    category_index: HashMap<String, Vec<Breed>>,
    selected_category: String,
    /// Display names, most recently toggled last, duplicate-free
    selected_breeds: Vec<String>,
    /// Image lists keyed by breed display name
    image_cache: HashMap<String, Vec<Url>>,
    /// Sticky random-image URLs keyed by breed display name
    random_cache: HashMap<String, Url>,
}

impl<D: BreedDirectory> SectionResolver<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            breed_list: Vec::new(),
            category_index: HashMap::new(),
            selected_category: DEFAULT_CATEGORY.to_string(),
            selected_breeds: Vec::new(),
            image_cache: HashMap::new(),
            random_cache: HashMap::new(),
        }
    }

    /// Name of the active category.
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Display names of the selected breeds, most recently toggled last.
    pub fn selected_breeds(&self) -> &[String] {
        &self.selected_breeds
    }

    /// Look up a full breed record by display name.
    pub fn breed(&self, name: &str) -> Option<&Breed> {
        self.breed_list.iter().find(|b| b.name == name)
    }

    /// Set the active category and reset the breed selection to the first
    /// breed of its bucket, or to empty if no data is loaded yet.
    pub fn select_category(&mut self, name: &str) {
        self.selected_category = name.to_string();
        match self
            .category_index
            .get(name)
            .and_then(|bucket| bucket.first())
        {
            Some(first) => self.selected_breeds = vec![first.name.clone()],
            None => self.selected_breeds.clear(),
        }
    }

    /// Toggle a breed's membership in the selection. Newly selected breeds
    /// go to the end.
    pub fn toggle_breed(&mut self, name: &str) {
        if let Some(position) = self.selected_breeds.iter().position(|b| b == name) {
            self.selected_breeds.remove(position);
        } else {
            self.selected_breeds.push(name.to_string());
        }
    }

    /// Random-image URL for a breed, fetched at most once per resolver
    /// lifetime.
    ///
    /// The first successful fetch is cached under the breed's display name
    /// and returned for every later call. Fetch failures propagate and are
    /// not cached; an unparseable URL string yields `Ok(None)` and is not
    /// cached either.
    pub async fn random_image_url(
        &mut self,
        breed: &Breed,
    ) -> Result<Option<Url>, DirectoryError> {
        if let Some(url) = self.random_cache.get(&breed.name) {
            return Ok(Some(url.clone()));
        }
        let raw = self.directory.fetch_random_image(&breed.api_key).await?;
        match Url::parse(&raw) {
            Ok(url) => {
                self.random_cache.insert(breed.name.clone(), url.clone());
                Ok(Some(url))
            }
            Err(_) => Ok(None),
        }
    }

    /// Resolve the current state into sections.
    ///
    /// Lazily loads the breed list and category index on first call, then
    /// assembles the category section (id `"categories"`), the breed
    /// section for the active category (id `"breed"`), and one image
    /// section per selected breed (id = the breed's API key, at most
    /// [`IMAGE_SECTION_LIMIT`] images). Image lists are fetched on demand,
    /// sequentially in selection order, and cached per display name.
    pub async fn resolve(&mut self) -> Result<SectionMap, DirectoryError> {
        if self.breed_list.is_empty() {
            let map = self.directory.fetch_all_breeds().await?;
            self.breed_list = flatten_breed_map(&map);
            info!(breeds = self.breed_list.len(), "loaded breed list");
        }
        if self.category_index.is_empty() {
            self.category_index = split_into_categories(category_list(), &self.breed_list);
            self.select_category(DEFAULT_CATEGORY);
        }

        let categories: Vec<Item> = CATEGORY_LIST
            .iter()
            .map(|category| {
                if category.name == self.selected_category {
                    Item::Category(category.clone().selected())
                } else {
                    Item::Category(category.clone())
                }
            })
            .collect();

        let breeds: Vec<Item> = self
            .category_index
            .get(&self.selected_category)
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|breed| {
                        if self.selected_breeds.contains(&breed.name) {
                            Item::Breed(breed.clone().selected())
                        } else {
                            Item::Breed(breed.clone())
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        // Selected names that no longer resolve to a record are skipped.
        let selected: Vec<Breed> = self
            .selected_breeds
            .iter()
            .filter_map(|name| self.breed(name).cloned())
            .collect();

        let mut sections = SectionMap::new();
        sections.insert(Section::categories(), categories);
        sections.insert(Section::breeds(), breeds);

        for breed in &selected {
            if !self.image_cache.contains_key(&breed.name) {
                debug!(breed = %breed.api_key, "fetching image list");
                let raw = self.directory.fetch_breed_images(&breed.api_key).await?;
                let urls: Vec<Url> = raw.iter().filter_map(|s| Url::parse(s).ok()).collect();
                self.image_cache.insert(breed.name.clone(), urls);
            }
            let images: Vec<Item> = self
                .image_cache
                .get(&breed.name)
                .map(|urls| {
                    urls.iter()
                        .take(IMAGE_SECTION_LIMIT)
                        .map(|url| Item::Image(DogImage { url: url.clone() }))
                        .collect()
                })
                .unwrap_or_default();
            sections.insert(Section::images(&breed.api_key), images);
        }

        Ok(sections)
    }
}

/// Flatten the directory's parent/sub-breed map into breed records, sorted
/// by display name in byte order.
fn flatten_breed_map(map: &BreedMap) -> Vec<Breed> {
    let mut breeds = Vec::new();
    for (parent, subs) in map {
        if subs.is_empty() {
            breeds.push(Breed::new(parent.as_str(), parent.as_str()));
        } else {
            for sub in subs {
                breeds.push(Breed::new(
                    format!("{parent} {sub}"),
                    format!("{parent}/{sub}"),
                ));
            }
        }
    }
    breeds.sort_by(|a, b| a.name.cmp(&b.name));
    breeds
}

/// Bucket breeds by the category whose range contains the first character
/// of their display name. Names starting outside `a`-`z` match no range
/// and are left out.
fn split_into_categories(
    categories: &[Category],
    breeds: &[Breed],
) -> HashMap<String, Vec<Breed>> {
    let mut buckets: HashMap<String, Vec<Breed>> = HashMap::new();
    for breed in breeds {
        let Some(first) = breed.name.chars().next() else {
            continue;
        };
        if let Some(category) = categories.iter().find(|c| c.range.contains(&first)) {
            buckets
                .entry(category.name.clone())
                .or_default()
                .push(breed.clone());
        }
    }
    buckets
}
