use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::filter::ServiceFilter;

/// Directory entry as exposed by the API: an active provider joined with its category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServiceProvider {
    pub id: i32,

    // Profile
    pub business_name: String,
    pub owner_name: Option<String>,
    pub description: Option<String>,
    pub price_range: Option<String>,

    // Contact
    pub instagram_handle: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,

    /// Name of the joined category
    pub category: String,
}

impl ServiceProvider {
    /// Find active providers matching `filter`, ordered by business name
    pub async fn search(filter: &ServiceFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let query = filter.to_query();

        let mut sql_query = sqlx::query_as::<_, Self>(&query.sql);
        for param in &query.params {
            sql_query = sql_query.bind(param);
        }

        let providers = sql_query.fetch_all(pool).await?;
        Ok(providers)
    }

    /// All active providers, ordered by business name
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        Self::search(&ServiceFilter::default(), pool).await
    }
}
