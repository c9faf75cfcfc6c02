//! JSON API for host integrations.
//!
//! String in, string out, mirroring the typed facade. Input identifiers
//! are case-insensitive; unknown ones are rejected with a typed error
//! rather than silently defaulted, since a substituted sign would break
//! the symmetry guarantees.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::models::{MatchResult, Profile, WuXingElement};
use crate::SCHEMA_VERSION;

/// One profile as supplied by the host.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProfileData {
    pub sign: String,
    pub animal: String,
    /// Birth year; used to derive the year element when no explicit
    /// `year_element` is given.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub year_element: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub profile_a: ProfileData,
    pub profile_b: ProfileData,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct MatchResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub result: MatchResult,
    /// Display label for the tier ("Soulmate Match", ...).
    pub tier_label: String,
}

impl ProfileData {
    fn resolve(&self) -> Result<Profile> {
        let sign = self.sign.parse()?;
        let animal = self.animal.parse()?;
        let year_element = match (&self.year_element, self.year) {
            (Some(name), _) => Some(name.parse::<WuXingElement>()?),
            (None, Some(year)) => Some(WuXingElement::from_year(year)),
            (None, None) => None,
        };
        Ok(Profile { sign, animal, year_element })
    }
}

/// Compute a compatibility classification from a JSON request.
pub fn compute_compatibility_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::InvalidSchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let a = request.profile_a.resolve()?;
    let b = request.profile_b.resolve()?;

    let result = super::compute_compatibility(&a, &b);
    debug!(
        "match {}/{} x {}/{} -> {} ({})",
        a.sign,
        a.animal,
        b.sign,
        b.animal,
        result.score,
        result.tier.label()
    );

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        tier_label: result.tier.label().to_string(),
        result,
    };
    Ok(serde_json::to_string(&response)?)
}
