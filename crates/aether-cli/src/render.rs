//! Plain-text views of catalog data.

use aether_core::{Category, Product};

pub(crate) const DISCLAIMER: &str =
    "This is a demonstration website. All products and prices are randomly generated.";

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn heading(category: Category) -> &'static str {
    match category {
        Category::Footwear => "Footwear",
        Category::Eyewear => "Eyewear",
    }
}

fn card_line(p: &Product) -> String {
    format!(
        "{} | {} | -{}% | {} (was {}) | {}\n",
        p.brand,
        p.title,
        p.discount_percentage,
        money(p.discounted_price),
        money(p.original_price),
        p.slug
    )
}

/// One line per card, then the disclaimer.
pub(crate) fn listing(category: Category, products: &[Product]) -> String {
    let mut out = format!("{} ({} items)\n", heading(category), products.len());
    for p in products {
        out.push_str(&card_line(p));
    }
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}

pub(crate) fn detail(product: &Product) -> String {
    let mut out = format!("{}\n{}\n", product.brand, product.title);
    out.push_str(&format!(
        "{}  was {}\n",
        money(product.discounted_price),
        money(product.original_price)
    ));
    out.push_str(&format!(
        "You Save {} ({}%)!\n",
        money(product.savings()),
        product.discount_percentage
    ));
    out.push_str(&product.description);
    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}
