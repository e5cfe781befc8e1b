use std::fmt;

use models::{product, product_image};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a caller-supplied term is resolved, decided once when the term
/// enters the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductLookup {
    Id(Uuid),
    /// Title (case-insensitive) or slug (exact).
    NameOrSlug(String),
}

impl ProductLookup {
    /// Only the canonical hyphenated form counts as an id; anything else is
    /// treated as a title or slug.
    pub fn parse(term: &str) -> Self {
        if term.len() == 36 {
            if let Ok(id) = Uuid::parse_str(term) {
                return Self::Id(id);
            }
        }
        Self::NameOrSlug(term.to_string())
    }
}

impl From<&str> for ProductLookup {
    fn from(term: &str) -> Self { Self::parse(term) }
}

impl From<Uuid> for ProductLookup {
    fn from(id: Uuid) -> Self { Self::Id(id) }
}

impl fmt::Display for ProductLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductLookup::Id(id) => write!(f, "{id}"),
            ProductLookup::NameOrSlug(term) => f.write_str(term),
        }
    }
}

/// Create input: scalar fields plus image URLs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProduct {
    #[serde(flatten)]
    pub details: product::NewProduct,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update. `images: None` keeps the stored images,
/// `Some(list)` replaces them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(flatten)]
    pub changes: product::ProductChanges,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Product row with its image records, as loaded or saved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductWithImages {
    #[serde(flatten)]
    pub product: product::Model,
    pub images: Vec<product_image::Model>,
}

impl ProductWithImages {
    pub fn into_plain(self) -> PlainProduct {
        PlainProduct {
            product: self.product,
            images: self.images.into_iter().map(|i| i.url).collect(),
        }
    }
}

/// External shape: product fields with images as bare URLs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlainProduct {
    #[serde(flatten)]
    pub product: product::Model,
    pub images: Vec<String>,
}
