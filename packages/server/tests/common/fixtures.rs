//! Test fixtures for creating directory rows.
//!
//! The service never writes these tables, so fixtures insert rows directly.

use anyhow::Result;
use sqlx::PgPool;

/// Provider row to insert. Unset optional columns stay NULL.
#[derive(Debug, Clone)]
pub struct NewProvider<'a> {
    pub business_name: &'a str,
    pub category_id: i32,
    pub description: Option<&'a str>,
    pub owner_name: Option<&'a str>,
    pub instagram_handle: Option<&'a str>,
    pub is_active: bool,
}

impl<'a> NewProvider<'a> {
    pub fn active(business_name: &'a str, category_id: i32) -> Self {
        Self {
            business_name,
            category_id,
            description: None,
            owner_name: None,
            instagram_handle: None,
            is_active: true,
        }
    }

    pub fn inactive(business_name: &'a str, category_id: i32) -> Self {
        Self {
            is_active: false,
            ..Self::active(business_name, category_id)
        }
    }

    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Create a category and return its id
pub async fn create_test_category(pool: &PgPool, name: &str) -> Result<i32> {
    let id = sqlx::query_scalar::<_, i32>("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Create a provider and return its id
pub async fn create_test_provider(pool: &PgPool, provider: NewProvider<'_>) -> Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO service_providers (
            business_name, owner_name, instagram_handle, price_range,
            description, phone, address, category_id, is_active
        )
        VALUES ($1, $2, $3, NULL, $4, NULL, NULL, $5, $6)
        RETURNING id
        "#,
    )
    .bind(provider.business_name)
    .bind(provider.owner_name)
    .bind(provider.instagram_handle)
    .bind(provider.description)
    .bind(provider.category_id)
    .bind(provider.is_active)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Seed the three-provider directory used by most tests:
/// Glow Skincare (active), Bloom Florals (active), Old Salon (inactive).
pub async fn seed_directory(pool: &PgPool) -> Result<()> {
    let wellness = create_test_category(pool, "Wellness & Skincare").await?;
    let floral = create_test_category(pool, "Floral & Events").await?;
    let beauty = create_test_category(pool, "Beauty").await?;

    create_test_provider(
        pool,
        NewProvider::active("Glow Skincare", wellness)
            .with_description("Facials and skin treatments"),
    )
    .await?;
    create_test_provider(
        pool,
        NewProvider::active("Bloom Florals", floral).with_description("Bouquets for every event"),
    )
    .await?;
    create_test_provider(
        pool,
        NewProvider::inactive("Old Salon", beauty).with_description("Cuts and color"),
    )
    .await?;

    Ok(())
}
