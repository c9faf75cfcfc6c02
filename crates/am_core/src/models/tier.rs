//! Compatibility tier labels.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of tier labels, ordered worst to best so that ceiling
/// rules can be expressed with `min`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Difficult,
    SixConflicts,
    Neutral,
    Favourable,
    Excellent,
    TwinFlame,
    Soulmate,
}

impl Tier {
    /// Base tier from the blended score, before label-level overrides.
    pub fn from_score(score: u8) -> Tier {
        match score {
            95..=u8::MAX => Tier::Soulmate,
            85..=94 => Tier::TwinFlame,
            75..=84 => Tier::Excellent,
            60..=74 => Tier::Favourable,
            50..=59 => Tier::Neutral,
            35..=49 => Tier::SixConflicts,
            _ => Tier::Difficult,
        }
    }

    /// Display label shown on match cards.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Soulmate => "Soulmate Match",
            Tier::TwinFlame => "Twin Flame Match",
            Tier::Excellent => "Excellent Match",
            Tier::Favourable => "Favourable Match",
            Tier::Neutral => "Neutral Match",
            Tier::SixConflicts => "Six Conflicts",
            Tier::Difficult => "Difficult Match",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Tier::from_score(100), Tier::Soulmate);
        assert_eq!(Tier::from_score(95), Tier::Soulmate);
        assert_eq!(Tier::from_score(94), Tier::TwinFlame);
        assert_eq!(Tier::from_score(85), Tier::TwinFlame);
        assert_eq!(Tier::from_score(84), Tier::Excellent);
        assert_eq!(Tier::from_score(75), Tier::Excellent);
        assert_eq!(Tier::from_score(74), Tier::Favourable);
        assert_eq!(Tier::from_score(60), Tier::Favourable);
        assert_eq!(Tier::from_score(59), Tier::Neutral);
        assert_eq!(Tier::from_score(50), Tier::Neutral);
        assert_eq!(Tier::from_score(49), Tier::SixConflicts);
        assert_eq!(Tier::from_score(35), Tier::SixConflicts);
        assert_eq!(Tier::from_score(34), Tier::Difficult);
        assert_eq!(Tier::from_score(0), Tier::Difficult);
    }

    #[test]
    fn test_ordering_supports_ceilings() {
        assert!(Tier::Difficult < Tier::SixConflicts);
        assert!(Tier::SixConflicts < Tier::Neutral);
        assert!(Tier::Neutral < Tier::Favourable);
        assert!(Tier::Favourable < Tier::Excellent);
        assert!(Tier::Excellent < Tier::TwinFlame);
        assert!(Tier::TwinFlame < Tier::Soulmate);
        // a ceiling is just a min
        assert_eq!(Tier::Soulmate.min(Tier::Excellent), Tier::Excellent);
    }
}
