use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use num_traits::ToPrimitive;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::pagination::Page;
use business::domain::product::value_objects::{CaffeineType, OriginType, RoastLevel};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum RoastLevelDto {
    #[oai(rename = "LIGHT")]
    Light,
    #[oai(rename = "MEDIUM")]
    Medium,
    #[oai(rename = "DARK")]
    Dark,
}

impl From<RoastLevel> for RoastLevelDto {
    fn from(level: RoastLevel) -> Self {
        match level {
            RoastLevel::Light => RoastLevelDto::Light,
            RoastLevel::Medium => RoastLevelDto::Medium,
            RoastLevel::Dark => RoastLevelDto::Dark,
        }
    }
}

impl From<RoastLevelDto> for RoastLevel {
    fn from(dto: RoastLevelDto) -> Self {
        match dto {
            RoastLevelDto::Light => RoastLevel::Light,
            RoastLevelDto::Medium => RoastLevel::Medium,
            RoastLevelDto::Dark => RoastLevel::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CaffeineTypeDto {
    #[oai(rename = "REGULAR")]
    Regular,
    #[oai(rename = "DECAF")]
    Decaf,
}

impl From<CaffeineType> for CaffeineTypeDto {
    fn from(caffeine: CaffeineType) -> Self {
        match caffeine {
            CaffeineType::Regular => CaffeineTypeDto::Regular,
            CaffeineType::Decaf => CaffeineTypeDto::Decaf,
        }
    }
}

impl From<CaffeineTypeDto> for CaffeineType {
    fn from(dto: CaffeineTypeDto) -> Self {
        match dto {
            CaffeineTypeDto::Regular => CaffeineType::Regular,
            CaffeineTypeDto::Decaf => CaffeineType::Decaf,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum OriginTypeDto {
    #[oai(rename = "SINGLE_ORIGIN")]
    SingleOrigin,
    #[oai(rename = "BLEND")]
    Blend,
}

impl From<OriginType> for OriginTypeDto {
    fn from(origin: OriginType) -> Self {
        match origin {
            OriginType::SingleOrigin => OriginTypeDto::SingleOrigin,
            OriginType::Blend => OriginTypeDto::Blend,
        }
    }
}

impl From<OriginTypeDto> for OriginType {
    fn from(dto: OriginTypeDto) -> Self {
        match dto {
            OriginTypeDto::SingleOrigin => OriginType::SingleOrigin,
            OriginTypeDto::Blend => OriginType::Blend,
        }
    }
}

/// Body of both `POST /coffees` and `PUT /coffees/:id`. Updates replace
/// every attribute, so the shape is identical.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CoffeeRequest {
    /// Coffee name (cannot be blank)
    pub name: String,
    #[oai(default)]
    pub description: String,
    #[oai(default)]
    pub image_url: String,
    /// Price per bag, at most two decimals
    pub price: f64,
    /// Bag weight in grams (positive)
    pub weight_grams: i32,
    pub stock_quantity: i32,
    pub roast_level: RoastLevelDto,
    /// Acidity score, 0 to 100
    pub acidity_level: i32,
    /// Body score, 0 to 100
    pub body_level: i32,
    pub caffeine_type: CaffeineTypeDto,
    pub origin_type: OriginTypeDto,
    #[oai(default)]
    pub origin_country: String,
    #[oai(default)]
    pub origin_region: String,
    pub roast_date: NaiveDate,
    #[oai(default)]
    pub flavor_notes: String,
    #[oai(default)]
    pub brewing_recommendation: String,
    #[oai(default)]
    pub is_featured: bool,
    #[oai(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// JSON numbers arrive as binary floats; their shortest decimal rendering is
/// what the client typed, so that is what gets parsed.
fn price_from_json(price: f64) -> Result<BigDecimal, ProductError> {
    if !price.is_finite() {
        return Err(ProductError::InvalidEntity("product.price_invalid"));
    }
    BigDecimal::from_str(&price.to_string())
        .map_err(|_| ProductError::InvalidEntity("product.price_invalid"))
}

impl TryFrom<CoffeeRequest> for ProductDetails {
    type Error = ProductError;

    fn try_from(request: CoffeeRequest) -> Result<Self, Self::Error> {
        Ok(ProductDetails {
            price: price_from_json(request.price)?,
            name: request.name,
            description: request.description,
            image_url: request.image_url,
            weight_grams: request.weight_grams,
            stock_quantity: request.stock_quantity,
            roast_level: request.roast_level.into(),
            acidity_level: request.acidity_level,
            body_level: request.body_level,
            caffeine_type: request.caffeine_type.into(),
            origin_type: request.origin_type.into(),
            origin_country: request.origin_country,
            origin_region: request.origin_region,
            roast_date: request.roast_date,
            flavor_notes: request.flavor_notes,
            brewing_recommendation: request.brewing_recommendation,
            is_featured: request.is_featured,
            is_available: request.is_available,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CoffeeResponse {
    /// Store-assigned identifier
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub weight_grams: i32,
    pub stock_quantity: i32,
    pub roast_level: RoastLevelDto,
    pub acidity_level: i32,
    pub body_level: i32,
    pub caffeine_type: CaffeineTypeDto,
    pub origin_type: OriginTypeDto,
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

impl From<Product> for CoffeeResponse {
    fn from(product: Product) -> Self {
        let details = product.details;
        Self {
            id: product.id.value(),
            price: details.price.to_f64().unwrap_or_default(),
            name: details.name,
            description: details.description,
            image_url: details.image_url,
            weight_grams: details.weight_grams,
            stock_quantity: details.stock_quantity,
            roast_level: details.roast_level.into(),
            acidity_level: details.acidity_level,
            body_level: details.body_level,
            caffeine_type: details.caffeine_type.into(),
            origin_type: details.origin_type.into(),
            origin_country: details.origin_country,
            origin_region: details.origin_region,
            roast_date: details.roast_date,
            flavor_notes: details.flavor_notes,
            brewing_recommendation: details.brewing_recommendation,
            is_featured: details.is_featured,
            is_available: details.is_available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CoffeePageResponse {
    pub content: Vec<CoffeeResponse>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page index
    pub page: u64,
    pub size: u64,
}

impl From<Page<Product>> for CoffeePageResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            content: page.items.into_iter().map(CoffeeResponse::from).collect(),
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            page: page.page,
            size: page.size,
        }
    }
}
