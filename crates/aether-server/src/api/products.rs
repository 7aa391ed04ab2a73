use aether_core::{CategorySelection, Product};
use axum::{
    extract::{Query, State},
    Json,
};

use super::AppState;

pub(super) const DEFAULT_COUNT: usize = 20;

/// `GET /api/products?count=<n>&category=<footwear|eyewear|all>`
///
/// Query values are taken as raw pairs so nothing in the query string can
/// produce a 400: the first occurrence of each key wins, and values that
/// don't parse fall back to their defaults.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Product>> {
    let count = parse_count(first_value(&pairs, "count"), state.max_count);
    let selection = CategorySelection::from_query(first_value(&pairs, "category"));

    tracing::debug!(
        count,
        category = selection.as_query_value(),
        "generating product batch"
    );

    let products = state.rng_source.generator().generate_batch(count, selection);
    Json(products)
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Coerce the raw `count` value the way a lenient numeric cast would.
///
/// Missing, empty, non-numeric, non-finite and zero values become
/// [`DEFAULT_COUNT`]. Fractions truncate toward zero, negatives yield an empty
/// batch, and the result never exceeds `max_count`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(super) fn parse_count(raw: Option<&str>, max_count: usize) -> usize {
    let Some(value) = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && v.abs() > 0.0)
    else {
        return DEFAULT_COUNT.min(max_count);
    };

    if value < 0.0 {
        return 0;
    }

    let whole = value.trunc();
    if whole >= max_count as f64 {
        max_count
    } else {
        whole as usize
    }
}
