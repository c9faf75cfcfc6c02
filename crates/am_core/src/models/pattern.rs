//! Classical Chinese relation patterns.
//!
//! A pair of animals can sit in several pattern tables at once (e.g.
//! Snake–Monkey is simultaneously Liu He, Xing and Po). The resolver
//! collects every match as an overlay set and picks one primary pattern
//! by [`ChinesePattern::PRIORITY`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Classical pattern between two Chinese zodiac animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChinesePattern {
    /// Same animal on both sides; mirror energy.
    SameAnimal,
    /// San He 三合, same trine group.
    SanHe,
    /// Liu He 六合, secret-friend pair.
    LiuHe,
    /// Liu Chong 六冲, opposition pair.
    LiuChong,
    /// Liu Hai 六害, harm pair.
    LiuHai,
    /// Xing 刑, punishment cluster.
    Xing,
    /// Po 破, break pair.
    Po,
    /// No classical pattern.
    NoPattern,
}

impl ChinesePattern {
    /// Primary-pattern precedence, strongest claim first.
    ///
    /// The order is a deliberate constant rather than a side effect of
    /// table construction; `test_priority_is_total` keeps it exhaustive.
    pub const PRIORITY: [ChinesePattern; 8] = [
        ChinesePattern::SameAnimal,
        ChinesePattern::SanHe,
        ChinesePattern::LiuHe,
        ChinesePattern::Po,
        ChinesePattern::LiuChong,
        ChinesePattern::LiuHai,
        ChinesePattern::Xing,
        ChinesePattern::NoPattern,
    ];

    /// Harmony patterns carry score floors in the blender.
    pub fn is_harmony(&self) -> bool {
        matches!(
            self,
            ChinesePattern::SanHe | ChinesePattern::LiuHe | ChinesePattern::SameAnimal
        )
    }

    /// Tension patterns carry score ceilings in the blender.
    pub fn is_tension(&self) -> bool {
        matches!(
            self,
            ChinesePattern::LiuChong
                | ChinesePattern::LiuHai
                | ChinesePattern::Xing
                | ChinesePattern::Po
        )
    }

    /// Pattern label (English)
    pub fn label_en(&self) -> &'static str {
        match self {
            ChinesePattern::SameAnimal => "Same Animal",
            ChinesePattern::SanHe => "Three Harmonies",
            ChinesePattern::LiuHe => "Secret Friends",
            ChinesePattern::LiuChong => "Six Conflicts",
            ChinesePattern::LiuHai => "Six Harms",
            ChinesePattern::Xing => "Punishment",
            ChinesePattern::Po => "Break",
            ChinesePattern::NoPattern => "Neutral",
        }
    }

    /// Pattern label (Chinese)
    pub fn label_zh(&self) -> &'static str {
        match self {
            ChinesePattern::SameAnimal => "同生肖",
            ChinesePattern::SanHe => "三合",
            ChinesePattern::LiuHe => "六合",
            ChinesePattern::LiuChong => "六冲",
            ChinesePattern::LiuHai => "六害",
            ChinesePattern::Xing => "刑",
            ChinesePattern::Po => "破",
            ChinesePattern::NoPattern => "无显著格局",
        }
    }

    /// Display glyph used by presentation code.
    pub fn emoji(&self) -> &'static str {
        match self {
            ChinesePattern::SameAnimal => "🪞",
            ChinesePattern::SanHe => "🌟",
            ChinesePattern::LiuHe => "💫",
            ChinesePattern::LiuChong => "⚠️",
            ChinesePattern::LiuHai => "💔",
            ChinesePattern::Xing => "🔥",
            ChinesePattern::Po => "💥",
            ChinesePattern::NoPattern => "◽",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_is_total() {
        // every pattern appears exactly once in the precedence list
        for pattern in [
            ChinesePattern::SameAnimal,
            ChinesePattern::SanHe,
            ChinesePattern::LiuHe,
            ChinesePattern::LiuChong,
            ChinesePattern::LiuHai,
            ChinesePattern::Xing,
            ChinesePattern::Po,
            ChinesePattern::NoPattern,
        ] {
            assert_eq!(
                ChinesePattern::PRIORITY.iter().filter(|p| **p == pattern).count(),
                1
            );
        }
    }

    #[test]
    fn test_priority_order_pins_known_overlaps() {
        let pos = |p: ChinesePattern| {
            ChinesePattern::PRIORITY.iter().position(|q| *q == p).unwrap()
        };
        // harmony outranks every tension pattern
        assert!(pos(ChinesePattern::LiuHe) < pos(ChinesePattern::Po));
        assert!(pos(ChinesePattern::SanHe) < pos(ChinesePattern::LiuChong));
        // Po outranks the other tension patterns, Xing comes last of them
        assert!(pos(ChinesePattern::Po) < pos(ChinesePattern::LiuChong));
        assert!(pos(ChinesePattern::LiuChong) < pos(ChinesePattern::LiuHai));
        assert!(pos(ChinesePattern::LiuHai) < pos(ChinesePattern::Xing));
        assert_eq!(pos(ChinesePattern::NoPattern), 7);
    }

    #[test]
    fn test_harmony_and_tension_partition() {
        for pattern in ChinesePattern::PRIORITY {
            assert!(!(pattern.is_harmony() && pattern.is_tension()));
        }
        assert!(!ChinesePattern::NoPattern.is_harmony());
        assert!(!ChinesePattern::NoPattern.is_tension());
    }
}
