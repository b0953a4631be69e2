use bigdecimal::BigDecimal;
use chrono::{Days, NaiveDate};

use business::domain::product::errors::ProductError;
use business::domain::product::model::{ProductDetails, ProductRecord};
use business::domain::product::predicate::ProductPredicate;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{CaffeineType, OriginType, RoastLevel};

fn price(cents: i64) -> BigDecimal {
    BigDecimal::new(cents.into(), 2)
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

/// The starter catalog, with roast dates relative to `today`.
pub fn sample_products(today: NaiveDate) -> Vec<ProductDetails> {
    vec![
        ProductDetails {
            name: "Ethiopian Yirgacheffe".to_string(),
            description: "A light roast coffee with bright acidity and floral notes.".to_string(),
            image_url: "/images/coffee/ethiopian-yirgacheffe.jpg".to_string(),
            price: price(2499),
            weight_grams: 250,
            stock_quantity: 100,
            roast_level: RoastLevel::Light,
            acidity_level: 85,
            body_level: 50,
            caffeine_type: CaffeineType::Regular,
            origin_type: OriginType::SingleOrigin,
            origin_country: "Ethiopia".to_string(),
            origin_region: "Yirgacheffe".to_string(),
            roast_date: days_before(today, 3),
            flavor_notes: "Floral, Citrus, Bright".to_string(),
            brewing_recommendation: "Pour over or drip brewing recommended".to_string(),
            is_featured: true,
            is_available: true,
        },
        ProductDetails {
            name: "Colombian Supremo".to_string(),
            description: "Medium roast with balanced flavor and rich body.".to_string(),
            image_url: "/images/coffee/colombian-supremo.jpg".to_string(),
            price: price(2299),
            weight_grams: 250,
            stock_quantity: 150,
            roast_level: RoastLevel::Medium,
            acidity_level: 60,
            body_level: 75,
            caffeine_type: CaffeineType::Regular,
            origin_type: OriginType::SingleOrigin,
            origin_country: "Colombia".to_string(),
            origin_region: "Huila".to_string(),
            roast_date: days_before(today, 2),
            flavor_notes: "Chocolate, Caramel, Nuts".to_string(),
            brewing_recommendation: "Versatile - suitable for any brewing method".to_string(),
            is_featured: true,
            is_available: true,
        },
        ProductDetails {
            name: "Decaf Sumatra".to_string(),
            description: "Full-bodied decaffeinated coffee with earthy undertones.".to_string(),
            image_url: "/images/coffee/decaf-sumatra.jpg".to_string(),
            price: price(2699),
            weight_grams: 250,
            stock_quantity: 80,
            roast_level: RoastLevel::Dark,
            acidity_level: 30,
            body_level: 90,
            caffeine_type: CaffeineType::Decaf,
            origin_type: OriginType::SingleOrigin,
            origin_country: "Indonesia".to_string(),
            origin_region: "Sumatra".to_string(),
            roast_date: days_before(today, 1),
            flavor_notes: "Earthy, Herbal, Full-bodied".to_string(),
            brewing_recommendation: "French press or espresso".to_string(),
            is_featured: true,
            is_available: true,
        },
        ProductDetails {
            name: "House Blend".to_string(),
            description: "Our signature blend combining beans from multiple origins.".to_string(),
            image_url: "/images/coffee/house-blend.jpg".to_string(),
            price: price(1999),
            weight_grams: 250,
            stock_quantity: 200,
            roast_level: RoastLevel::Medium,
            acidity_level: 55,
            body_level: 65,
            caffeine_type: CaffeineType::Regular,
            origin_type: OriginType::Blend,
            origin_country: "Multiple".to_string(),
            origin_region: "Various".to_string(),
            roast_date: today,
            flavor_notes: "Balanced, Smooth, Approachable".to_string(),
            brewing_recommendation: "Perfect for drip coffee makers".to_string(),
            is_featured: true,
            is_available: true,
        },
    ]
}

/// Inserts the starter catalog when the store holds no products.
/// Returns how many products were inserted.
pub async fn seed_sample_products(
    repository: &dyn ProductRepository,
    today: NaiveDate,
) -> Result<usize, ProductError> {
    let existing = repository
        .count_matching(&ProductPredicate::match_all())
        .await
        .map_err(ProductError::StoreUnavailable)?;
    if existing > 0 {
        tracing::debug!("Catalog already holds {} products, skipping seed", existing);
        return Ok(0);
    }

    let samples = sample_products(today);
    let count = samples.len();
    for details in samples {
        let record = ProductRecord::new(details)?;
        repository
            .insert(&record)
            .await
            .map_err(ProductError::StoreUnavailable)?;
    }

    tracing::info!("Seeded catalog with {} sample products", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::memory::ProductRepositoryInMemory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn should_produce_valid_samples() {
        let samples = sample_products(today());
        assert_eq!(samples.len(), 4);
        for details in samples {
            assert!(ProductRecord::new(details).is_ok());
        }
    }

    #[test]
    fn should_date_roasts_relative_to_today() {
        let samples = sample_products(today());
        assert_eq!(
            samples[0].roast_date,
            NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()
        );
        assert_eq!(samples[3].roast_date, today());
    }

    #[tokio::test]
    async fn should_seed_empty_store_once() {
        let repository = ProductRepositoryInMemory::new();

        let first = seed_sample_products(&repository, today()).await.unwrap();
        let second = seed_sample_products(&repository, today()).await.unwrap();

        assert_eq!(first, 4);
        assert_eq!(second, 0);
        assert_eq!(
            repository
                .count_matching(&ProductPredicate::match_all())
                .await
                .unwrap(),
            4
        );
    }
}
