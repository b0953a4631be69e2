use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use num_traits::Zero;

use super::errors::ProductError;
use super::value_objects::{CaffeineType, OriginType, RoastLevel};
use crate::domain::shared::value_objects::ProductId;

/// Number of fractional digits kept for prices.
pub const PRICE_SCALE: i64 = 2;
/// Largest price a `NUMERIC(10, 2)` column can hold, in hundredths.
const PRICE_MAX_CENTS: i64 = 9_999_999_999;

/// Largest accepted price, 99,999,999.99.
pub fn price_max() -> BigDecimal {
    BigDecimal::new(PRICE_MAX_CENTS.into(), PRICE_SCALE)
}

/// Inclusive bounds for the acidity and body scores.
pub const LEVEL_MIN: i32 = 0;
pub const LEVEL_MAX: i32 = 100;

/// Every caller-supplied attribute of a catalog product.
///
/// Used as-is for both creation and full-replace updates. The name is
/// expected to be unique across the catalog but nothing enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: BigDecimal,
    pub weight_grams: i32,
    pub stock_quantity: i32,
    pub roast_level: RoastLevel,
    pub acidity_level: i32,
    pub body_level: i32,
    pub caffeine_type: CaffeineType,
    pub origin_type: OriginType,
    pub origin_country: String,
    pub origin_region: String,
    pub roast_date: NaiveDate,
    pub flavor_notes: String,
    pub brewing_recommendation: String,
    pub is_featured: bool,
    pub is_available: bool,
}

impl ProductDetails {
    /// Checks the numeric and textual invariants a persisted product must hold,
    /// returning the details with the price normalized to two decimals.
    pub fn validate(mut self) -> Result<Self, ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::InvalidEntity("product.name_empty"));
        }
        if self.price < BigDecimal::zero() {
            return Err(ProductError::InvalidEntity("product.price_negative"));
        }
        if self.price > price_max() {
            return Err(ProductError::InvalidEntity("product.price_too_large"));
        }
        if self.price.with_scale(PRICE_SCALE) != self.price {
            return Err(ProductError::InvalidEntity("product.price_scale"));
        }
        if self.weight_grams <= 0 {
            return Err(ProductError::InvalidEntity("product.weight_not_positive"));
        }
        if self.stock_quantity < 0 {
            return Err(ProductError::InvalidEntity("product.stock_negative"));
        }
        if !(LEVEL_MIN..=LEVEL_MAX).contains(&self.acidity_level) {
            return Err(ProductError::InvalidEntity("product.acidity_out_of_range"));
        }
        if !(LEVEL_MIN..=LEVEL_MAX).contains(&self.body_level) {
            return Err(ProductError::InvalidEntity("product.body_out_of_range"));
        }

        self.price = self.price.with_scale(PRICE_SCALE);
        Ok(self)
    }
}

/// A validated product that has not been assigned an id yet.
/// This is what gets handed to the store on insert and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub details: ProductDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    pub fn new(details: ProductDetails) -> Result<Self, ProductError> {
        let details = details.validate()?;
        let now = Utc::now();
        Ok(Self {
            details,
            created_at: now,
            updated_at: now,
        })
    }

    /// Turns this record into the full replacement for `existing`, keeping
    /// its creation time. The details were validated when the record was built.
    pub fn replacing(self, existing: &Product) -> Self {
        Self {
            created_at: existing.created_at,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub details: ProductDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_record(id: ProductId, record: ProductRecord) -> Self {
        Self {
            id,
            details: record.details,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{details, product};
    use super::*;
    use std::str::FromStr;

    fn assert_invalid(details: ProductDetails, code: &str) {
        match ProductRecord::new(details) {
            Err(ProductError::InvalidEntity(actual)) => assert_eq!(actual, code),
            other => panic!("expected {}, got {:?}", code, other),
        }
    }

    #[test]
    fn should_accept_valid_details() {
        let record = ProductRecord::new(details("Ethiopian Yirgacheffe", 85)).unwrap();
        assert_eq!(record.details.acidity_level, 85);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn should_reject_blank_name() {
        assert_invalid(details("   ", 50), "product.name_empty");
    }

    #[test]
    fn should_reject_acidity_above_one_hundred() {
        assert_invalid(details("Too Sour", 150), "product.acidity_out_of_range");
    }

    #[test]
    fn should_reject_negative_body() {
        let mut d = details("Thin", 50);
        d.body_level = -1;
        assert_invalid(d, "product.body_out_of_range");
    }

    #[test]
    fn should_accept_level_bounds_inclusively() {
        let mut d = details("Edges", 0);
        d.body_level = 100;
        assert!(ProductRecord::new(d).is_ok());
    }

    #[test]
    fn should_reject_negative_price() {
        let mut d = details("Refund", 50);
        d.price = BigDecimal::from_str("-0.01").unwrap();
        assert_invalid(d, "product.price_negative");
    }

    #[test]
    fn should_reject_price_with_more_than_two_decimals() {
        let mut d = details("Precise", 50);
        d.price = BigDecimal::from_str("1.999").unwrap();
        assert_invalid(d, "product.price_scale");
    }

    #[test]
    fn should_reject_price_beyond_storable_maximum() {
        let mut d = details("Gold Plated", 50);
        d.price = BigDecimal::from_str("123456789.00").unwrap();
        assert_invalid(d, "product.price_too_large");
    }

    #[test]
    fn should_accept_largest_storable_price() {
        let mut d = details("Almost Gold", 50);
        d.price = BigDecimal::from_str("99999999.99").unwrap();
        assert!(ProductRecord::new(d).is_ok());
    }

    #[test]
    fn should_normalize_price_scale() {
        let mut d = details("Round", 50);
        d.price = BigDecimal::from_str("24.9").unwrap();
        let record = ProductRecord::new(d).unwrap();
        assert_eq!(record.details.price.to_string(), "24.90");
    }

    #[test]
    fn should_reject_zero_weight() {
        let mut d = details("Weightless", 50);
        d.weight_grams = 0;
        assert_invalid(d, "product.weight_not_positive");
    }

    #[test]
    fn should_reject_negative_stock() {
        let mut d = details("Oversold", 50);
        d.stock_quantity = -3;
        assert_invalid(d, "product.stock_negative");
    }

    #[test]
    fn should_keep_creation_time_when_replacing() {
        let existing = product(3, "House Blend", 55);
        let record = ProductRecord::new(details("House Blend", 60))
            .unwrap()
            .replacing(&existing);
        assert_eq!(record.created_at, existing.created_at);
        assert!(record.updated_at >= existing.updated_at);
        assert_eq!(record.details.acidity_level, 60);
    }
}
