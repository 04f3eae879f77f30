/// Projection returned by every directory query. Column aliases match the JSON field names.
const SELECT_ACTIVE_PROVIDERS: &str = r#"
    SELECT
        sp.id,
        sp.business_name,
        sp.owner_name,
        sp.instagram_handle,
        sp.price_range,
        sp.description,
        sp.phone,
        sp.address,
        c.name AS category
    FROM service_providers sp
    JOIN categories c ON sp.category_id = c.id
    WHERE sp.is_active = true"#;

/// Optional search/category filters taken from the request query string.
///
/// Empty strings count as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// A composed statement plus its bound values, in `$n` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub sql: String,
    pub params: Vec<String>,
}

impl ServiceFilter {
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            category: Some(category.into()),
        }
    }

    /// Build a filter from raw query-string pairs.
    ///
    /// Never fails: unknown keys are ignored and a repeated key has its values joined
    /// with `,`, so odd input just becomes a filter string that matches nothing.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        fn append(slot: &mut Option<String>, value: String) {
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }

        let mut filter = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => append(&mut filter.search, value),
                "category" => append(&mut filter.category, value),
                _ => {}
            }
        }
        filter
    }

    /// Search term, if one was actually supplied
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Category fragment, if one was actually supplied
    pub fn category_term(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Compose the directory query for this filter.
    ///
    /// User input only ever reaches the database as a bound parameter; the SQL text
    /// depends solely on which filters are present.
    pub fn to_query(&self) -> FilterQuery {
        let mut query = String::from(SELECT_ACTIVE_PROVIDERS);
        let mut params: Vec<String> = vec![];
        let mut param_idx = 1;

        if let Some(search) = self.search_term() {
            query.push_str(&format!(
                " AND (sp.business_name ILIKE ${idx} OR sp.description ILIKE ${idx})",
                idx = param_idx
            ));
            params.push(contains_pattern(search));
            param_idx += 1;
        }

        if let Some(category) = self.category_term() {
            query.push_str(&format!(" AND c.name ILIKE ${}", param_idx));
            params.push(contains_pattern(category));
        }

        query.push_str(" ORDER BY sp.business_name");

        FilterQuery { sql: query, params }
    }
}

/// Wrap `value` as an ILIKE "contains" pattern, escaping LIKE metacharacters so the
/// input is matched literally. Postgres uses `\` as the default LIKE escape.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
