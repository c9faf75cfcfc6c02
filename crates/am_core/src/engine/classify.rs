//! Tier classifier.
//!
//! The label is derived from the score thresholds first, then the band
//! rules from the blender are re-asserted at the label level so score
//! and label can never disagree, whatever the arithmetic said.

use crate::models::{ChinesePattern, Tier};

/// Classify a blended score into its tier label.
pub fn classify(score: u8, primary: ChinesePattern, same_sign: bool, same_animal: bool) -> Tier {
    // no classical pattern, and the full mirror, always read as neutral
    if primary == ChinesePattern::NoPattern || (same_sign && same_animal) {
        return Tier::Neutral;
    }

    let mut tier = Tier::from_score(score);

    // tension patterns top out in the conflict band
    if primary.is_tension() {
        tier = tier.min(Tier::SixConflicts);
    }

    // a mirror on either axis is never rated fully fated
    if same_sign || same_animal {
        tier = tier.min(Tier::Excellent);
    }

    tier
}
