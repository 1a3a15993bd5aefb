//! Keyword-based category classification

use crate::types::Category;

/// Ordered classification rules; the first category with a matching keyword wins
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Transport,
        &[
            "uber", "ola", "taxi", "cab", "auto", "rickshaw", "bus", "train", "metro", "petrol",
            "diesel", "fuel", "parking",
        ],
    ),
    (
        Category::Food,
        &[
            "brunch", "breakfast", "lunch", "dinner", "meal", "biryani", "pizza", "burger",
            "restaurant", "hotel", "cafe", "dhaba",
        ],
    ),
    (
        Category::Snacks,
        &[
            "snack", "chips", "biscuit", "chocolate", "ice cream", "juice", "tea", "coffee",
            "samosa", "namkeen", "evening",
        ],
    ),
    (
        Category::Shopping,
        &[
            "shopping", "clothes", "shoes", "amazon", "flipkart", "myntra", "grocery", "market",
            "mall", "store",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "netflix", "prime", "spotify", "game", "pubg", "fun", "party", "drinks",
            "alcohol", "concert",
        ],
    ),
];

/// Infer a category from an expense description.
///
/// Matching is a case-insensitive substring test, so `"Brunch at cafe"` and
/// `"Uber pool"` both hit. Descriptions matching several categories take the
/// earliest one in [`CATEGORY_KEYWORDS`]; no match yields [`Category::Other`].
pub fn classify(description: &str) -> Category {
    let lowered = description.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
