//! Wu Xing 五行 year elements and their pairwise relation.
//!
//! The year element is an optional input: it nudges the blended score a
//! little but is never required, and a missing element degrades to the
//! neutral [`WuXingRelation::Other`] rather than failing.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// One of the Five Elements, derived from a birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WuXingElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Pairwise Wu Xing relation, symmetric over the two classical cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WuXingRelation {
    Same,
    /// Either element feeds the other on the generating cycle.
    Generating,
    /// Either element checks the other on the controlling cycle.
    Controlling,
    /// No cycle relation, or a year element was not supplied.
    Other,
}

impl WuXingElement {
    /// Year element on the 10-year cycle (1984 = Wood).
    ///
    /// Each element covers two consecutive years (yang then yin).
    pub fn from_year(year: i32) -> WuXingElement {
        const CYCLE: [WuXingElement; 10] = [
            WuXingElement::Wood,
            WuXingElement::Wood,
            WuXingElement::Fire,
            WuXingElement::Fire,
            WuXingElement::Earth,
            WuXingElement::Earth,
            WuXingElement::Metal,
            WuXingElement::Metal,
            WuXingElement::Water,
            WuXingElement::Water,
        ];
        let offset = (year - 1984).rem_euclid(10);
        CYCLE[offset as usize]
    }

    /// The element this one produces on the generating cycle
    /// (Wood → Fire → Earth → Metal → Water → Wood).
    pub fn generates(&self) -> WuXingElement {
        match self {
            WuXingElement::Wood => WuXingElement::Fire,
            WuXingElement::Fire => WuXingElement::Earth,
            WuXingElement::Earth => WuXingElement::Metal,
            WuXingElement::Metal => WuXingElement::Water,
            WuXingElement::Water => WuXingElement::Wood,
        }
    }

    /// The element this one restrains on the controlling cycle
    /// (Wood → Earth → Water → Fire → Metal → Wood).
    pub fn controls(&self) -> WuXingElement {
        match self {
            WuXingElement::Wood => WuXingElement::Earth,
            WuXingElement::Earth => WuXingElement::Water,
            WuXingElement::Water => WuXingElement::Fire,
            WuXingElement::Fire => WuXingElement::Metal,
            WuXingElement::Metal => WuXingElement::Wood,
        }
    }

    /// Element name (English)
    pub fn name_en(&self) -> &'static str {
        match self {
            WuXingElement::Wood => "Wood",
            WuXingElement::Fire => "Fire",
            WuXingElement::Earth => "Earth",
            WuXingElement::Metal => "Metal",
            WuXingElement::Water => "Water",
        }
    }
}

impl fmt::Display for WuXingElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name_en())
    }
}

impl FromStr for WuXingElement {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wood" => Ok(WuXingElement::Wood),
            "fire" => Ok(WuXingElement::Fire),
            "earth" => Ok(WuXingElement::Earth),
            "metal" => Ok(WuXingElement::Metal),
            "water" => Ok(WuXingElement::Water),
            _ => Err(MatchError::InvalidYearElement(s.to_string())),
        }
    }
}

impl WuXingRelation {
    /// Relation between two optional year elements. Either side missing
    /// resolves to [`WuXingRelation::Other`].
    pub fn between(a: Option<WuXingElement>, b: Option<WuXingElement>) -> WuXingRelation {
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            _ => return WuXingRelation::Other,
        };
        if a == b {
            WuXingRelation::Same
        } else if a.generates() == b || b.generates() == a {
            WuXingRelation::Generating
        } else if a.controls() == b || b.controls() == a {
            WuXingRelation::Controlling
        } else {
            WuXingRelation::Other
        }
    }
}
