//! Category metadata
//!
//! Static display metadata (icon name and hex color) for the known income
//! and expense category codes. The category domain is open: unknown codes
//! get a default icon and color rather than failing.

/// Display metadata for a category code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub icon: &'static str,
    pub color: &'static str,
}

const DEFAULT_METADATA: CategoryMetadata = CategoryMetadata {
    icon: "tag",
    color: "#9e9e9e",
};

/// Known income category codes
pub const INCOME_CATEGORIES: &[&str] = &["salary", "freelance", "investment", "gift"];

/// Known expense category codes
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "food",
    "transport",
    "housing",
    "utilities",
    "entertainment",
    "shopping",
    "health",
    "education",
];

/// Look up display metadata for a category code, falling back to the default
pub fn metadata(category: &str) -> CategoryMetadata {
    let (icon, color) = match category {
        "salary" => ("money-bill", "#4CAF50"),
        "freelance" => ("laptop", "#8BC34A"),
        "investment" => ("chart-line", "#009688"),
        "gift" => ("gift", "#E91E63"),
        "food" => ("utensils", "#FF9800"),
        "transport" => ("car", "#2196F3"),
        "housing" => ("home", "#795548"),
        "utilities" => ("bolt", "#FFC107"),
        "entertainment" => ("film", "#9C27B0"),
        "shopping" => ("shopping-bag", "#F44336"),
        "health" => ("heartbeat", "#00BCD4"),
        "education" => ("graduation-cap", "#3F51B5"),
        _ => return DEFAULT_METADATA,
    };
    CategoryMetadata { icon, color }
}

/// Title-case a kebab-case category code for display ("food" -> "Food")
pub fn display_name(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
