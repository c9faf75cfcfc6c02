//! # am_core - Deterministic East-West Compatibility Engine
//!
//! This library computes a compatibility classification for a pair of
//! astrological profiles (Western zodiac sign + Chinese zodiac animal,
//! with an optional birth-year element) and exposes a JSON API for easy
//! integration with app shells.
//!
//! ## Features
//! - 100% deterministic classification (same pair = same result)
//! - Symmetric by construction: (A, B) and (B, A) always agree
//! - Classical rule tables (San He, Liu He, Liu Chong, Liu Hai, Xing, Po)
//!   blended 70/30 with the Western sign relation
//! - Precomputed 12x12x12x12 result matrix for O(1) lookups
//! - JSON API for host integrations

pub mod api;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod models;
pub mod table;

// Re-export main API
pub use api::{compute_compatibility, compute_compatibility_json, MatchRequest, MatchResponse};
pub use error::{MatchError, Result};
pub use models::{
    AspectRelation, ChineseAnimal, ChinesePattern, ElementRelation, MatchResult, Profile, Tier,
    Trine, WestRelation, WesternElement, WesternSign, WuXingElement, WuXingRelation,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_classification() {
        let request = json!({
            "schema_version": 1,
            "profile_a": { "sign": "aquarius", "animal": "rat" },
            "profile_b": { "sign": "gemini", "animal": "monkey" }
        });

        let result = compute_compatibility_json(&request.to_string());
        assert!(result.is_ok(), "classification should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert!(parsed["score"].is_number());
        assert!(parsed["tier"].is_string());
        assert!(parsed["overlay_patterns"].is_array());
    }

    #[test]
    fn test_typed_facade_round_trip() {
        let a = Profile::parse("scorpio", "dragon").unwrap();
        let b = Profile::parse("cancer", "rooster").unwrap();
        let result = compute_compatibility(&a, &b);

        // Dragon-Rooster is a Liu He pair, Scorpio-Cancer a Water trine
        assert_eq!(result.primary_pattern, ChinesePattern::LiuHe);
        assert_eq!(result.element_relation, ElementRelation::Same);
        assert!(result.tier >= Tier::Excellent);
    }
}
