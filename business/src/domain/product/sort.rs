use std::cmp::Ordering;

use super::errors::ProductError;
use super::model::Product;

/// Attributes a product listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    RoastDate,
    AcidityLevel,
    BodyLevel,
    CreatedAt,
}

const SORT_FIELDS: &[(&str, SortField)] = &[
    ("name", SortField::Name),
    ("price", SortField::Price),
    ("roastDate", SortField::RoastDate),
    ("roast_date", SortField::RoastDate),
    ("acidityLevel", SortField::AcidityLevel),
    ("acidity_level", SortField::AcidityLevel),
    ("bodyLevel", SortField::BodyLevel),
    ("body_level", SortField::BodyLevel),
    ("createdAt", SortField::CreatedAt),
    ("created_at", SortField::CreatedAt),
];

impl SortField {
    /// Looks the field up in the whitelist, ignoring ASCII case.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        let raw = raw.trim();
        SORT_FIELDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(raw))
            .map(|(_, field)| *field)
            .ok_or_else(|| ProductError::InvalidSort(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::RoastDate => "roastDate",
            SortField::AcidityLevel => "acidityLevel",
            SortField::BodyLevel => "bodyLevel",
            SortField::CreatedAt => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ProductError::InvalidSort(raw.to_string())),
        }
    }
}

/// Resolved ordering for a listing.
///
/// Products with equal sort keys are always ordered by ascending id, whatever
/// the direction, so repeated identical queries page through the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductOrdering {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ProductOrdering {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Names compare by code point, so `"Beta"` sorts before `"alpha"`. Store
    /// adapters must order the same way.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let by_key = match self.field {
            SortField::Name => a.details.name.cmp(&b.details.name),
            SortField::Price => a.details.price.cmp(&b.details.price),
            SortField::RoastDate => a.details.roast_date.cmp(&b.details.roast_date),
            SortField::AcidityLevel => a.details.acidity_level.cmp(&b.details.acidity_level),
            SortField::BodyLevel => a.details.body_level.cmp(&b.details.body_level),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        let by_key = match self.direction {
            SortDirection::Ascending => by_key,
            SortDirection::Descending => by_key.reverse(),
        };
        by_key.then_with(|| a.id.cmp(&b.id))
    }

    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for ProductOrdering {
    fn default() -> Self {
        Self::new(SortField::Name, SortDirection::Ascending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::fixtures::product;
    use proptest::prelude::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.details.name.as_str()).collect()
    }

    #[test]
    fn should_accept_camel_and_snake_case_fields() {
        assert_eq!(SortField::parse("roastDate").unwrap(), SortField::RoastDate);
        assert_eq!(SortField::parse("ROAST_DATE").unwrap(), SortField::RoastDate);
        assert_eq!(SortField::parse(" price ").unwrap(), SortField::Price);
    }

    #[test]
    fn should_reject_field_outside_whitelist() {
        let result = SortField::parse("stockQuantity; DROP TABLE products");
        assert!(matches!(result, Err(ProductError::InvalidSort(_))));
    }

    #[test]
    fn should_parse_direction_case_insensitively() {
        assert_eq!(SortDirection::parse("DESC").unwrap(), SortDirection::Descending);
        assert_eq!(SortDirection::parse("Asc").unwrap(), SortDirection::Ascending);
        assert!(matches!(
            SortDirection::parse("sideways"),
            Err(ProductError::InvalidSort(_))
        ));
    }

    #[test]
    fn should_break_ties_by_ascending_id_in_both_directions() {
        let mut products = vec![
            product(3, "Same", 40),
            product(1, "Same", 40),
            product(2, "Same", 40),
        ];

        ProductOrdering::new(SortField::AcidityLevel, SortDirection::Descending).sort(&mut products);
        let ids: Vec<i64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        ProductOrdering::new(SortField::AcidityLevel, SortDirection::Ascending).sort(&mut products);
        let ids: Vec<i64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn should_sort_by_acidity_descending() {
        let mut products = vec![
            product(1, "Decaf Sumatra", 30),
            product(2, "Ethiopian Yirgacheffe", 85),
            product(3, "Colombian Supremo", 60),
        ];
        ProductOrdering::new(SortField::AcidityLevel, SortDirection::Descending).sort(&mut products);
        assert_eq!(
            names(&products),
            vec!["Ethiopian Yirgacheffe", "Colombian Supremo", "Decaf Sumatra"]
        );
    }

    #[test]
    fn should_order_names_by_code_point() {
        let mut products = vec![product(1, "alpha", 50), product(2, "Beta", 50)];
        ProductOrdering::default().sort(&mut products);
        assert_eq!(names(&products), vec!["Beta", "alpha"]);
    }

    proptest! {
        #[test]
        fn should_reverse_ascending_name_order_when_descending(
            raw in proptest::collection::btree_set("[A-Za-z]{1,12}", 0..12)
        ) {
            let mut products: Vec<Product> = raw
                .iter()
                .enumerate()
                .map(|(i, name)| product(i as i64 + 1, name, 50))
                .collect();
            let mut descending = products.clone();

            ProductOrdering::new(SortField::Name, SortDirection::Ascending).sort(&mut products);
            ProductOrdering::new(SortField::Name, SortDirection::Descending).sort(&mut descending);

            descending.reverse();
            prop_assert_eq!(names(&products), names(&descending));
        }
    }
}
