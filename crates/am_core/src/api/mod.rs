//! Public entry points.
//!
//! The typed facade is [`compute_compatibility`]; [`match_json`] wraps
//! it in a string-in/string-out JSON API for host integrations.

pub mod match_json;

pub use match_json::{compute_compatibility_json, MatchRequest, MatchResponse, ProfileData};

use crate::engine;
use crate::models::{MatchResult, Profile};
use crate::table;

/// Compute the full compatibility classification for two profiles.
///
/// Pure and deterministic: identical inputs always produce identical
/// results, and the arguments commute.
pub fn compute_compatibility(a: &Profile, b: &Profile) -> MatchResult {
    if a.year_element.is_none() && b.year_element.is_none() {
        return table::lookup(a.sign, a.animal, b.sign, b.animal).clone();
    }
    engine::evaluate(a, b)
}
