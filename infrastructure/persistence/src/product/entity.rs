use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: BigDecimal,
    pub weight_grams: i32,
    pub stock_quantity: i32,
    pub roast_level: String,
    pub acidity_level: i32,
    pub body_level: i32,
    pub caffeine_type: String,
    pub origin_type: String,
    pub origin_country: String,
    pub origin_region: String,
    pub roast_date: NaiveDate,
    pub flavor_notes: String,
    pub brewing_recommendation: String,
    pub is_featured: bool,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn parse_column<E: std::str::FromStr>(column: &str, value: &str) -> Result<E, RepositoryError> {
    value.parse().map_err(|_| {
        tracing::warn!("Unexpected value '{}' in products.{}", value, column);
        RepositoryError::Persistence
    })
}

impl ProductEntity {
    pub fn try_into_domain(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: ProductId::new(self.id),
            details: ProductDetails {
                roast_level: parse_column("roast_level", &self.roast_level)?,
                caffeine_type: parse_column("caffeine_type", &self.caffeine_type)?,
                origin_type: parse_column("origin_type", &self.origin_type)?,
                name: self.name,
                description: self.description,
                image_url: self.image_url,
                price: self.price,
                weight_grams: self.weight_grams,
                stock_quantity: self.stock_quantity,
                acidity_level: self.acidity_level,
                body_level: self.body_level,
                origin_country: self.origin_country,
                origin_region: self.origin_region,
                roast_date: self.roast_date,
                flavor_notes: self.flavor_notes,
                brewing_recommendation: self.brewing_recommendation,
                is_featured: self.is_featured,
                is_available: self.is_available,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
