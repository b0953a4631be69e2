//! Composite filter predicate over catalog products.
//!
//! A predicate is a plain conjunction of clauses. It can be evaluated in
//! memory with [`ProductPredicate::matches`] or walked clause by clause by a
//! store adapter that translates it into its own query language.

use super::criteria::FilterCriteria;
use super::model::Product;
use super::value_objects::{CaffeineType, OriginType, RoastLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductClause {
    /// Lowercased needle matched as a substring of name or description.
    Keyword(String),
    RoastLevel(RoastLevel),
    CaffeineType(CaffeineType),
    OriginType(OriginType),
    AcidityAtLeast(i32),
    AcidityAtMost(i32),
    BodyAtLeast(i32),
    BodyAtMost(i32),
    Featured(bool),
}

impl ProductClause {
    pub fn matches(&self, product: &Product) -> bool {
        let details = &product.details;
        match self {
            ProductClause::Keyword(needle) => {
                details.name.to_lowercase().contains(needle.as_str())
                    || details.description.to_lowercase().contains(needle.as_str())
            }
            ProductClause::RoastLevel(level) => details.roast_level == *level,
            ProductClause::CaffeineType(caffeine) => details.caffeine_type == *caffeine,
            ProductClause::OriginType(origin) => details.origin_type == *origin,
            ProductClause::AcidityAtLeast(min) => details.acidity_level >= *min,
            ProductClause::AcidityAtMost(max) => details.acidity_level <= *max,
            ProductClause::BodyAtLeast(min) => details.body_level >= *min,
            ProductClause::BodyAtMost(max) => details.body_level <= *max,
            ProductClause::Featured(featured) => details.is_featured == *featured,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPredicate {
    clauses: Vec<ProductClause>,
}

impl ProductPredicate {
    /// The empty conjunction; matches every product.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Builds the conjunction of every dimension present in `criteria`.
    /// Paging and ordering are ignored.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut predicate = Self::match_all();

        if let Some(keyword) = &criteria.keyword {
            predicate = predicate.and(ProductClause::Keyword(keyword.to_lowercase()));
        }
        if let Some(level) = criteria.roast_level {
            predicate = predicate.and(ProductClause::RoastLevel(level));
        }
        if let Some(caffeine) = criteria.caffeine_type {
            predicate = predicate.and(ProductClause::CaffeineType(caffeine));
        }
        if let Some(origin) = criteria.origin_type {
            predicate = predicate.and(ProductClause::OriginType(origin));
        }
        if let Some(min) = criteria.acidity.min {
            predicate = predicate.and(ProductClause::AcidityAtLeast(min));
        }
        if let Some(max) = criteria.acidity.max {
            predicate = predicate.and(ProductClause::AcidityAtMost(max));
        }
        if let Some(min) = criteria.body.min {
            predicate = predicate.and(ProductClause::BodyAtLeast(min));
        }
        if let Some(max) = criteria.body.max {
            predicate = predicate.and(ProductClause::BodyAtMost(max));
        }

        predicate
    }

    pub fn and(mut self, clause: ProductClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[ProductClause] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.clauses.iter().all(|clause| clause.matches(product))
    }
}
