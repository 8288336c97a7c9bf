//! Keyword-based spending category classification.

use crate::models::receipt::Category;

/// Categories in priority order with their keywords. The first category
/// with any keyword present in the text wins.
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Food, &["restaurant", "food", "cafe", "dine", "meal"]),
    (Category::Travel, &["taxi", "uber", "flight", "bus", "train", "travel"]),
    (Category::Office, &["stationery", "office", "printer", "paper", "supply"]),
    (Category::Shopping, &["mall", "shopping", "store", "purchase"]),
    (Category::Medical, &["pharmacy", "medical", "hospital", "clinic"]),
    (Category::Utilities, &["electricity", "water", "gas", "utility", "bill"]),
    (Category::Groceries, &["grocery", "supermarket", "groceries"]),
];

/// Classify receipt text by substring keywords.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Uncategorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category() {
        assert_eq!(classify("Joe's CAFE"), Category::Food);
        assert_eq!(classify("City Taxi Co"), Category::Travel);
        assert_eq!(classify("Printer ink"), Category::Office);
        assert_eq!(classify("Westfield Mall"), Category::Shopping);
        assert_eq!(classify("Main St Pharmacy"), Category::Medical);
        assert_eq!(classify("Electricity bill"), Category::Utilities);
        assert_eq!(classify("FreshCo Supermarket"), Category::Groceries);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("Restaurant inside the store"), Category::Food);
        // "supermarket" is Groceries but "store" is checked earlier
        assert_eq!(classify("Supermarket store #12"), Category::Shopping);
    }

    #[test]
    fn test_substring_matches() {
        // "bus" inside "business"
        assert_eq!(classify("Business lunch"), Category::Travel);
    }

    #[test]
    fn test_uncategorized() {
        assert_eq!(classify(""), Category::Uncategorized);
        assert_eq!(classify("Acme Hardware\nTotal 99.99"), Category::Uncategorized);
    }
}
