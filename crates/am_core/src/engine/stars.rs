//! Chemistry/stability star ratings.
//!
//! Two 0-5 half-step ratings used by presentation code for display
//! weighting. The pattern and score band set a base pair, the Western
//! aspect tweaks it: soft aspects ease everything, hard aspects and
//! oppositions trade stability for chemistry.

use crate::models::{AspectRelation, ChinesePattern};

/// Star pair for one match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPair {
    pub chemistry: f32,
    pub stability: f32,
}

fn base_stars(pattern: ChinesePattern, score: u8) -> StarPair {
    let (chemistry, stability) = match pattern {
        ChinesePattern::SanHe => match score {
            90..=u8::MAX => (4.5, 5.0),
            82..=89 => (4.0, 4.5),
            _ => (3.5, 4.0),
        },
        ChinesePattern::LiuHe => match score {
            86..=u8::MAX => (4.5, 4.5),
            78..=85 => (4.0, 4.0),
            _ => (3.5, 3.5),
        },
        ChinesePattern::SameAnimal => match score {
            80..=u8::MAX => (4.0, 3.5),
            72..=79 => (3.5, 3.0),
            _ => (3.0, 2.5),
        },
        ChinesePattern::NoPattern => match score {
            68..=u8::MAX => (3.5, 3.0),
            58..=67 => (3.0, 2.5),
            _ => (2.5, 2.0),
        },
        ChinesePattern::LiuChong => match score {
            60..=u8::MAX => (4.0, 2.5),
            48..=59 => (3.0, 2.0),
            _ => (2.5, 1.5),
        },
        ChinesePattern::LiuHai => match score {
            58..=u8::MAX => (3.5, 2.5),
            45..=57 => (3.0, 2.0),
            _ => (2.5, 1.5),
        },
        ChinesePattern::Xing => match score {
            56..=u8::MAX => (3.0, 2.0),
            45..=55 => (2.5, 1.5),
            _ => (2.0, 1.0),
        },
        ChinesePattern::Po => match score {
            54..=u8::MAX => (3.0, 2.0),
            42..=53 => (2.5, 1.5),
            _ => (2.0, 1.0),
        },
    };
    StarPair { chemistry, stability }
}

fn round_half(x: f32) -> f32 {
    (x * 2.0).round() / 2.0
}

/// Final star ratings for a classified match.
pub fn star_ratings(
    pattern: ChinesePattern,
    score: u8,
    aspect: AspectRelation,
    same_sign: bool,
) -> StarPair {
    let base = base_stars(pattern, score);
    let mut chemistry = base.chemistry;
    let mut stability = base.stability;

    if aspect.is_soft() {
        chemistry += 0.5;
        // tension patterns gain spark from soft aspects, not steadiness
        if !pattern.is_tension() {
            stability += 0.5;
        }
    } else if aspect.is_hard() {
        chemistry += 0.5;
        stability -= 0.5;
    }

    if pattern.is_tension() {
        chemistry = chemistry.clamp(0.0, 4.0);
        stability = stability.clamp(0.0, 3.0);
    } else {
        chemistry = chemistry.clamp(0.0, 5.0);
        stability = stability.clamp(0.0, 5.0);
    }

    // mirror-sign San He pairs never feel completely effortless
    if pattern == ChinesePattern::SanHe && same_sign {
        stability = stability.min(4.0);
    }

    StarPair { chemistry: round_half(chemistry), stability: round_half(stability) }
}
