use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RoastLevel {
    Light,
    Medium,
    Dark,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CaffeineType {
    Regular,
    Decaf,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OriginType {
    SingleOrigin,
    Blend,
}

/// Resolves user input against one of the closed enumerations above.
///
/// The input is trimmed and uppercased before lookup, so `"light"` and
/// `" Light "` both resolve to `RoastLevel::Light`. Unknown values yield
/// `None`; there is no fallback variant.
pub fn parse_normalized<E: FromStr>(raw: &str) -> Option<E> {
    raw.trim().to_uppercase().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_resolve_roast_level_ignoring_case_and_whitespace() {
        assert_eq!(parse_normalized::<RoastLevel>("light"), Some(RoastLevel::Light));
        assert_eq!(parse_normalized::<RoastLevel>(" Dark "), Some(RoastLevel::Dark));
        assert_eq!(parse_normalized::<RoastLevel>("MEDIUM"), Some(RoastLevel::Medium));
    }

    #[test]
    fn should_resolve_multi_word_origin_type() {
        assert_eq!(
            parse_normalized::<OriginType>("single_origin"),
            Some(OriginType::SingleOrigin)
        );
        assert_eq!(parse_normalized::<OriginType>("single-origin"), None);
    }

    #[test]
    fn should_fail_closed_on_unknown_value() {
        assert_eq!(parse_normalized::<CaffeineType>("half-caf"), None);
        assert_eq!(parse_normalized::<CaffeineType>(""), None);
    }

    #[test]
    fn should_round_trip_every_variant_through_its_stored_name() {
        for level in RoastLevel::iter() {
            assert_eq!(parse_normalized::<RoastLevel>(level.as_ref()), Some(level));
        }
        for caffeine in CaffeineType::iter() {
            assert_eq!(parse_normalized::<CaffeineType>(caffeine.as_ref()), Some(caffeine));
        }
        for origin in OriginType::iter() {
            assert_eq!(parse_normalized::<OriginType>(origin.as_ref()), Some(origin));
        }
    }

    #[test]
    fn should_display_as_screaming_snake_case() {
        assert_eq!(OriginType::SingleOrigin.to_string(), "SINGLE_ORIGIN");
        assert_eq!(CaffeineType::Decaf.to_string(), "DECAF");
    }
}
