//! Score blender.
//!
//! Combines the per-pattern east factor with the per-relation west
//! factor at a fixed 70/30 weighting, then pushes the raw score through
//! the override pipeline: mirror penalty, Wu Xing nudge, harmony
//! floors, overlay and mirror ceilings, tension bands. The Chinese
//! pattern dominates the verdict; the Western relation nudges it.

use crate::engine::context::MatchContext;
use crate::models::{ChinesePattern, WestRelation, WuXingRelation};

/// Mirror penalty for sharing the Western sign (~14.5% reduction).
const SAME_SIGN_PENALTY: f64 = 0.855;

/// Per-pattern east weight in [0, 1].
pub fn east_factor(pattern: ChinesePattern) -> f64 {
    match pattern {
        ChinesePattern::SanHe => 0.97,
        ChinesePattern::LiuHe => 0.88,
        ChinesePattern::SameAnimal => 0.86,
        ChinesePattern::NoPattern => 0.62,
        ChinesePattern::LiuChong => 0.45,
        ChinesePattern::LiuHai => 0.43,
        ChinesePattern::Xing => 0.40,
        ChinesePattern::Po => 0.30,
    }
}

/// Per-relation west weight in [0, 1].
pub fn west_factor(relation: WestRelation) -> f64 {
    match relation {
        WestRelation::SameSign => 1.0,
        WestRelation::SameElement => 0.9,
        WestRelation::CompatibleElement => 0.85,
        WestRelation::SemiCompatible => 0.7,
        WestRelation::Opposing => 0.55,
    }
}

/// Raw 70/30 blend before any override.
pub fn base_score(pattern: ChinesePattern, relation: WestRelation) -> u8 {
    let raw = 100.0 * (0.7 * east_factor(pattern) + 0.3 * west_factor(relation));
    (raw.round() as i32).clamp(0, 100) as u8
}

/// Year-element nudge. Harmony patterns feel the elements most, tension
/// patterns barely; a missing element contributes nothing.
fn wu_xing_delta(pattern: ChinesePattern, relation: WuXingRelation) -> i32 {
    enum Class {
        Harmony,
        Tension,
        Neutral,
    }
    let class = match pattern {
        ChinesePattern::SanHe | ChinesePattern::LiuHe => Class::Harmony,
        p if p.is_tension() => Class::Tension,
        _ => Class::Neutral,
    };
    match (relation, class) {
        (WuXingRelation::Generating, Class::Harmony) => 6,
        (WuXingRelation::Generating, Class::Neutral) => 4,
        (WuXingRelation::Generating, Class::Tension) => 2,
        (WuXingRelation::Same, Class::Harmony) => 4,
        (WuXingRelation::Same, Class::Neutral) => 2,
        (WuXingRelation::Same, Class::Tension) => 1,
        (WuXingRelation::Controlling, Class::Harmony) => -6,
        (WuXingRelation::Controlling, Class::Neutral) => -4,
        (WuXingRelation::Controlling, Class::Tension) => -2,
        (WuXingRelation::Other, _) => 0,
    }
}

/// Blend a resolved context into the final 0..=100 score.
pub fn blend(ctx: &MatchContext) -> u8 {
    let pattern = ctx.east.primary;
    let west = ctx.west.west_relation;
    let mut score = base_score(pattern, west) as i32;

    // 1. mirror penalty before any band rule
    if west == WestRelation::SameSign {
        score = (score as f64 * SAME_SIGN_PENALTY).round() as i32;
    }

    // 2. year elements nudge the raw value, never the bands
    score += wu_xing_delta(pattern, ctx.wu_xing);

    // 3. no classical pattern: fixed neutral band, nothing else applies
    if pattern == ChinesePattern::NoPattern {
        return score.clamp(50, 59) as u8;
    }

    let strong_west = west.is_strong();

    // 4. harmony floors
    match pattern {
        ChinesePattern::SanHe => {
            score = score.max(if strong_west { 88 } else { 80 });
        }
        ChinesePattern::LiuHe => {
            score = score.max(if strong_west { 75 } else { 70 });
        }
        ChinesePattern::SameAnimal => {
            score = score.max(if strong_west { 75 } else { 60 });
        }
        _ => {}
    }

    // 5. damage overlays drag a harmony primary back down
    if matches!(pattern, ChinesePattern::SanHe | ChinesePattern::LiuHe) {
        let damage = ctx.east.damage_overlays().count();
        if damage >= 2 {
            score = score.min(if strong_west { 84 } else { 82 });
        } else if damage == 1 {
            score = score.min(if strong_west { 86 } else { 82 });
        }
    }

    // 6. a same-animal mirror never reaches the Twin Flame band
    if pattern == ChinesePattern::SameAnimal {
        score = score.min(84);
    }

    // 7. tension ceilings
    match pattern {
        ChinesePattern::LiuChong => score = score.clamp(35, 49),
        ChinesePattern::Xing | ChinesePattern::LiuHai => score = score.min(45),
        ChinesePattern::Po => score = score.min(40),
        _ => {}
    }

    // 8. same-Western-sign global caps
    if ctx.same_sign {
        if pattern.is_tension() {
            score = score.min(49);
        } else if ctx.same_animal {
            // full mirror: both sign and animal shared
            score = score.clamp(50, 59);
        } else {
            score = score.clamp(60, 74);
        }
    }

    score.clamp(0, 100) as u8
}
