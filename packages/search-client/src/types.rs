use serde::{Deserialize, Serialize};

/// A provider as returned by `GET /api/services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: i64,
    pub business_name: String,
    pub owner_name: Option<String>,
    pub instagram_handle: Option<String>,
    pub price_range: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category: String,
}

/// Snapshot of the filter inputs sent with one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ServiceQuery {
    pub search: String,
    pub category: String,
}

impl ServiceQuery {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Unfiltered query (initial load)
    pub fn all() -> Self {
        Self::default()
    }

    /// Query-string pairs; empty inputs are omitted entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.as_str()));
        }
        pairs
    }
}

/// A selectable category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value sent as `category`; empty means no filter
    pub value: &'static str,
    pub label: &'static str,
}

/// Category filters offered by the directory front end.
pub const CATEGORY_OPTIONS: &[CategoryOption] = &[
    CategoryOption { value: "", label: "All" },
    CategoryOption { value: "beauty", label: "Beauty" },
    CategoryOption { value: "wellness", label: "Wellness" },
    CategoryOption { value: "food", label: "Food" },
    CategoryOption { value: "floral", label: "Floral" },
];
