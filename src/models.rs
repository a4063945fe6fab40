//! Data model for the breed browser.
//!
//! These are the types the resolver hands to a presentation layer: fixed
//! alphabetical categories, breeds (flattened parent/sub-breed records),
//! image URLs, and the section/item shapes they are grouped into.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use reqwest::Url;

/// One of the seven fixed alphabetical buckets partitioning breeds by the
/// first letter of their display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// Bucket name, e.g. `"a-c"`
    pub name: String,
    /// Inclusive range of leading letters this bucket covers
    pub range: RangeInclusive<char>,
    /// Whether this is the active category in the current render
    pub is_selected: bool,
}

impl Category {
    /// Copy of this category with the selection flag set.
    pub fn selected(self) -> Self {
        Self {
            is_selected: true,
            ..self
        }
    }
}

/// A browsable breed. Sub-breeds are flattened into their own records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breed {
    /// Display name: the parent key, or `"<parent> <sub>"` for sub-breeds
    pub name: String,
    /// Path segment used in directory calls: the parent key, or
    /// `"<parent>/<sub>"` for sub-breeds
    pub api_key: String,
    /// Whether this breed is selected in the current render
    pub is_selected: bool,
}

impl Breed {
    /// Create an unselected breed record.
    pub fn new(name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
            is_selected: false,
        }
    }

    /// Copy of this breed with the selection flag set.
    pub fn selected(self) -> Self {
        Self {
            is_selected: true,
            ..self
        }
    }
}

/// A single breed photo. Equality is by URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DogImage {
    pub url: Url,
}

/// The kind of content a section holds.
///
/// The derived ordering (categories, then breeds, then image grids) is the
/// order a consumer renders sections in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionType {
    Category,
    Breed,
    Images,
}

/// A named, typed group of items in the resolved presentation model.
///
/// `Ord` sorts by type first and id second, so a `BTreeMap` keyed by
/// `Section` iterates in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Section {
    pub kind: SectionType,
    pub id: String,
}

impl Section {
    /// The single category-list section.
    pub fn categories() -> Self {
        Self {
            kind: SectionType::Category,
            id: "categories".to_string(),
        }
    }

    /// The single breed-list section.
    pub fn breeds() -> Self {
        Self {
            kind: SectionType::Breed,
            id: "breed".to_string(),
        }
    }

    /// An image-grid section for one selected breed, identified by its
    /// API key.
    pub fn images(api_key: &str) -> Self {
        Self {
            kind: SectionType::Images,
            id: api_key.to_string(),
        }
    }
}

/// One cell's worth of content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Category(Category),
    Breed(Breed),
    Image(DogImage),
}

impl Item {
    pub fn as_category(&self) -> Option<&Category> {
        if let Item::Category(category) = self {
            Some(category)
        } else {
            None
        }
    }

    pub fn as_breed(&self) -> Option<&Breed> {
        if let Item::Breed(breed) = self {
            Some(breed)
        } else {
            None
        }
    }

    pub fn as_image(&self) -> Option<&DogImage> {
        if let Item::Image(image) = self {
            Some(image)
        } else {
            None
        }
    }
}

/// The resolved presentation model: sections in render order, each with its
/// ordered items.
pub type SectionMap = BTreeMap<Section, Vec<Item>>;
