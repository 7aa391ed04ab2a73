//! Word pools for synthetic brands, titles and descriptions.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::products::Category;

const LAST_NAMES: &[&str] = &[
    "Abbott", "Barton", "Becker", "Bergstrom", "Collins", "Dietrich", "Emard", "Fahey",
    "Feeney", "Gleason", "Greenholt", "Hartmann", "Hayes", "Jakubowski", "Kessler", "Koch",
    "Kuhn", "Larson", "Lindgren", "Marquardt", "Mertz", "Nolan", "Okuneva", "Pfeffer",
    "Quigley", "Reichel", "Rosenbaum", "Schaefer", "Schmitt", "Stark", "Torp", "Ullrich",
    "Vandervort", "Walsh", "Wehner", "Yundt", "Zieme",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Co", "Studio"];

const ADJECTIVES: &[&str] = &[
    "Awesome", "Bespoke", "Classic", "Elegant", "Ergonomic", "Fantastic", "Gorgeous",
    "Handcrafted", "Handmade", "Incredible", "Lightweight", "Modern", "Practical", "Refined",
    "Rustic", "Sleek", "Small", "Tailored", "Unbranded", "Vintage",
];

const FOOTWEAR_MATERIALS: &[&str] = &[
    "Canvas", "Cotton", "Leather", "Mesh", "Rubber", "Suede", "Wool", "Knit", "Cork", "Nubuck",
];

const EYEWEAR_MATERIALS: &[&str] = &[
    "Acetate", "Bamboo", "Carbon", "Horn", "Metal", "Steel", "Titanium", "Tortoiseshell",
    "Wooden", "Polarized",
];

const FOOTWEAR_ITEMS: &[&str] = &[
    "Sneakers", "Boots", "Loafers", "Sandals", "Oxfords", "Trainers", "Slip-Ons", "Brogues",
    "Espadrilles", "Runners",
];

const EYEWEAR_ITEMS: &[&str] = &[
    "Sunglasses", "Aviators", "Wayfarers", "Shades", "Cat-Eye Frames", "Round Frames",
    "Clubmasters", "Shield Glasses", "Browline Frames", "Reading Glasses",
];

const DESCRIPTION_OPENERS: &[&str] = &[
    "Designed for everyday wear,",
    "Built to last,",
    "Inspired by classic silhouettes,",
    "Made for the weekend and beyond,",
    "A staple of any wardrobe,",
];

const DESCRIPTION_CLOSERS: &[&str] = &[
    "pairs with anything in your closet.",
    "balances comfort with a clean finish.",
    "keeps its shape season after season.",
    "is finished by hand in small batches.",
    "ships in recyclable packaging.",
];

fn pick<R: Rng>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    // Pools are non-empty constants.
    pool.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn brand<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub(crate) fn title<R: Rng>(rng: &mut R, category: Category) -> String {
    let (materials, items) = match category {
        Category::Footwear => (FOOTWEAR_MATERIALS, FOOTWEAR_ITEMS),
        Category::Eyewear => (EYEWEAR_MATERIALS, EYEWEAR_ITEMS),
    };
    format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, materials),
        pick(rng, items)
    )
}

pub(crate) fn description<R: Rng>(rng: &mut R, title: &str) -> String {
    format!(
        "{} the {} {}",
        pick(rng, DESCRIPTION_OPENERS),
        title,
        pick(rng, DESCRIPTION_CLOSERS)
    )
}
