//! Synthetic deal generation.
//!
//! [`ProductGenerator`] is generic over any [`rand::Rng`], so callers pick the
//! randomness: OS entropy for live traffic, a seeded [`StdRng`] for
//! reproducible output. [`RngSource`] hands out one fresh `StdRng` per request
//! so no generator state is shared between requests.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::names;
use crate::pricing::{
    original_price, round_to_cents, MAX_DISCOUNTED_PRICE, MAX_DISCOUNT_PERCENTAGE,
    MIN_DISCOUNTED_PRICE, MIN_DISCOUNT_PERCENTAGE,
};
use crate::products::{Category, CategorySelection, Product};
use crate::slug::slugify;

pub const IMAGE_WIDTH: u32 = 400;
pub const IMAGE_HEIGHT: u32 = 533;
const IMAGE_SERVICE_BASE: &str = "https://loremflickr.com";

pub struct ProductGenerator<R: Rng = StdRng> {
    rng: R,
}

impl ProductGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same records.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ProductGenerator<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce one fully populated record for `category`.
    pub fn generate(&mut self, category: Category) -> Product {
        let rng = &mut self.rng;

        let discounted_price = round_to_cents(
            rng.random_range(MIN_DISCOUNTED_PRICE..=MAX_DISCOUNTED_PRICE),
        );
        let discount_percentage =
            rng.random_range(MIN_DISCOUNT_PERCENTAGE..=MAX_DISCOUNT_PERCENTAGE);

        let mut id_bytes = [0u8; 16];
        rng.fill(&mut id_bytes);
        let id = uuid::Builder::from_random_bytes(id_bytes).into_uuid().to_string();

        let image_url = image_url(category, rng.random_range(1..=100_000u32));
        let brand = names::brand(rng);
        let title = names::title(rng, category);
        let description = names::description(rng, &title);

        Product {
            id,
            category,
            image_url,
            brand,
            slug: slugify(&title),
            title,
            description,
            original_price: original_price(discounted_price, discount_percentage),
            discounted_price,
            discount_percentage,
        }
    }

    /// Produce exactly `count` independent records.
    ///
    /// With [`CategorySelection::Mixed`] each record flips its own coin for
    /// footwear or eyewear.
    pub fn generate_batch(&mut self, count: usize, selection: CategorySelection) -> Vec<Product> {
        (0..count)
            .map(|_| {
                let category = match selection {
                    CategorySelection::Only(category) => category,
                    CategorySelection::Mixed => {
                        if self.rng.random_bool(0.5) {
                            Category::Footwear
                        } else {
                            Category::Eyewear
                        }
                    }
                };
                self.generate(category)
            })
            .collect()
    }
}

fn image_url(category: Category, lock: u32) -> String {
    format!(
        "{IMAGE_SERVICE_BASE}/{IMAGE_WIDTH}/{IMAGE_HEIGHT}/{}?lock={lock}",
        category.image_keyword()
    )
}

/// Per-request source of randomness.
#[derive(Debug)]
pub enum RngSource {
    /// Fresh OS entropy for every request.
    Entropy,
    /// `base + n` for the n-th request since startup.
    Seeded { base: u64, issued: AtomicU64 },
}

impl RngSource {
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(base) => RngSource::Seeded {
                base,
                issued: AtomicU64::new(0),
            },
            None => RngSource::Entropy,
        }
    }

    #[must_use]
    pub fn generator(&self) -> ProductGenerator<StdRng> {
        match self {
            RngSource::Entropy => ProductGenerator::from_entropy(),
            RngSource::Seeded { base, issued } => {
                let n = issued.fetch_add(1, Ordering::Relaxed);
                ProductGenerator::from_seed(base.wrapping_add(n))
            }
        }
    }
}
