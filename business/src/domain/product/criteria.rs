use super::errors::ProductError;
use super::pagination::PageRequest;
use super::sort::{ProductOrdering, SortDirection, SortField};
use super::value_objects::{CaffeineType, OriginType, RoastLevel, parse_normalized};

/// Filter, sort and paging input exactly as a caller supplied it.
#[derive(Debug, Clone, Default)]
pub struct RawProductFilter {
    pub keyword: Option<String>,
    pub roast_level: Option<String>,
    pub caffeine_type: Option<String>,
    pub origin_type: Option<String>,
    pub min_acidity: Option<i32>,
    pub max_acidity: Option<i32>,
    pub min_body: Option<i32>,
    pub max_body: Option<i32>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

/// Inclusive bounds on a 0-100 score. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl LevelRange {
    fn new(field: &'static str, min: Option<i32>, max: Option<i32>) -> Result<Self, ProductError> {
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(ProductError::InvalidRange { field });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Fully typed listing criteria. Every dimension is optional; an absent one
/// places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub keyword: Option<String>,
    pub roast_level: Option<RoastLevel>,
    pub caffeine_type: Option<CaffeineType>,
    pub origin_type: Option<OriginType>,
    pub acidity: LevelRange,
    pub body: LevelRange,
    pub page: PageRequest,
    pub ordering: ProductOrdering,
}

impl FilterCriteria {
    /// Validates and normalizes raw input. Nothing downstream re-checks it.
    pub fn parse(raw: RawProductFilter) -> Result<Self, ProductError> {
        let keyword = raw
            .keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let roast_level = resolve_enum("roastLevel", raw.roast_level)?;
        let caffeine_type = resolve_enum("caffeineType", raw.caffeine_type)?;
        let origin_type = resolve_enum("originType", raw.origin_type)?;

        let acidity = LevelRange::new("acidity", raw.min_acidity, raw.max_acidity)?;
        let body = LevelRange::new("body", raw.min_body, raw.max_body)?;

        let page = PageRequest::new(raw.page, raw.size)?;

        let field = match raw.sort_by.as_deref() {
            Some(field) => SortField::parse(field)?,
            None => SortField::Name,
        };
        let direction = match raw.sort_direction.as_deref() {
            Some(direction) => SortDirection::parse(direction)?,
            None => SortDirection::Ascending,
        };

        Ok(Self {
            keyword,
            roast_level,
            caffeine_type,
            origin_type,
            acidity,
            body,
            page,
            ordering: ProductOrdering::new(field, direction),
        })
    }
}

fn resolve_enum<E: std::str::FromStr>(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<E>, ProductError> {
    match raw {
        None => Ok(None),
        Some(value) => parse_normalized(&value)
            .map(Some)
            .ok_or(ProductError::InvalidCriterion { field, value }),
    }
}
