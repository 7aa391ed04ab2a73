//! Page fetchers for the storefront: the category listing and the
//! slug-based detail lookup, both served by the catalog endpoint.

pub mod cache;
pub mod client;
pub mod error;

pub use client::{CatalogClient, DEFAULT_REVALIDATE, DETAIL_BATCH_COUNT, LISTING_COUNT};
pub use error::ClientError;
