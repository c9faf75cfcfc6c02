//! Input profiles and the final match result value object.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::models::animal::ChineseAnimal;
use crate::models::pattern::ChinesePattern;
use crate::models::relations::{AspectRelation, ElementRelation};
use crate::models::sign::WesternSign;
use crate::models::tier::Tier;
use crate::models::wuxing::WuXingElement;

/// One person's astrological signature: Western sign, Chinese animal and
/// an optional birth-year Wu Xing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    pub sign: WesternSign,
    pub animal: ChineseAnimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_element: Option<WuXingElement>,
}

impl Profile {
    pub fn new(sign: WesternSign, animal: ChineseAnimal) -> Profile {
        Profile { sign, animal, year_element: None }
    }

    /// Profile with the year element derived from the birth year.
    pub fn with_year(sign: WesternSign, animal: ChineseAnimal, year: i32) -> Profile {
        Profile { sign, animal, year_element: Some(WuXingElement::from_year(year)) }
    }

    /// Parse a profile from case-insensitive identifiers.
    pub fn parse(sign: &str, animal: &str) -> Result<Profile, MatchError> {
        Ok(Profile::new(sign.parse()?, animal.parse()?))
    }
}

/// Full classification for one pair of profiles.
///
/// `primary_pattern` plus `tier` form the lookup key downstream
/// presentation code uses to select descriptive copy; the engine itself
/// never produces free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchResult {
    /// Blended compatibility score, always 0..=100.
    pub score: u8,
    pub tier: Tier,
    pub primary_pattern: ChinesePattern,
    /// Every classical pattern the pair matches, in priority order.
    pub overlay_patterns: Vec<ChinesePattern>,
    pub element_relation: ElementRelation,
    pub aspect_relation: AspectRelation,
    pub same_sign: bool,
    pub same_animal: bool,
    /// 0–5 in half steps; display weighting only.
    pub chemistry_stars: f32,
    /// 0–5 in half steps; display weighting only.
    pub stability_stars: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let profile = Profile::parse("Aquarius", "rat").unwrap();
        assert_eq!(profile.sign, WesternSign::Aquarius);
        assert_eq!(profile.animal, ChineseAnimal::Rat);
        assert_eq!(profile.year_element, None);
    }

    #[test]
    fn test_with_year_derives_element() {
        let profile = Profile::with_year(WesternSign::Leo, ChineseAnimal::Ox, 1985);
        assert_eq!(profile.year_element, Some(WuXingElement::Wood));
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = Profile::with_year(WesternSign::Pisces, ChineseAnimal::Goat, 1991);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"pisces\""));
        assert!(json.contains("\"goat\""));
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
