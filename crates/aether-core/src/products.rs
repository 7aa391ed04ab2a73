use serde::{Deserialize, Serialize};

use crate::pricing::round_to_cents;

/// Storefront department a deal is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Footwear,
    Eyewear,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Footwear, Category::Eyewear];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Footwear => "footwear",
            Category::Eyewear => "eyewear",
        }
    }

    /// Keyword passed to the placeholder image service.
    #[must_use]
    pub fn image_keyword(self) -> &'static str {
        match self {
            Category::Footwear => "shoes",
            Category::Eyewear => "sunglasses",
        }
    }

    /// Strict parse of a category name. Unlike [`CategorySelection::from_query`]
    /// this does not fall back to a default.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "footwear" => Some(Category::Footwear),
            "eyewear" => Some(Category::Eyewear),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which categories a batch of generated products is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelection {
    Only(Category),
    /// Every record independently picks footwear or eyewear with equal odds.
    Mixed,
}

impl CategorySelection {
    /// Interpret the raw `category` query value.
    ///
    /// `"all"` selects [`CategorySelection::Mixed`]; `"footwear"` and
    /// `"eyewear"` select that category. Anything else, including a missing
    /// value, falls back to footwear without raising an error.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("all") => CategorySelection::Mixed,
            Some(value) => {
                CategorySelection::Only(Category::parse(value).unwrap_or(Category::Footwear))
            }
            None => CategorySelection::Only(Category::Footwear),
        }
    }

    /// Wire value accepted by [`CategorySelection::from_query`].
    #[must_use]
    pub fn as_query_value(self) -> &'static str {
        match self {
            CategorySelection::Only(category) => category.as_str(),
            CategorySelection::Mixed => "all",
        }
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        CategorySelection::Only(Category::Footwear)
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

/// A synthetic deal. Generated per request and never persisted, so two
/// records may share a title and therefore a slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub category: Category,
    pub image_url: String,
    pub brand: String,
    pub title: String,
    /// Lowercase, URL-safe form of `title`; used for detail-page lookup.
    pub slug: String,
    pub description: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub discount_percentage: u8,
}

impl Product {
    /// Amount saved against the original price, rounded to cents.
    #[must_use]
    pub fn savings(&self) -> f64 {
        round_to_cents(self.original_price - self.discounted_price)
    }

    #[must_use]
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug == slug
    }
}
