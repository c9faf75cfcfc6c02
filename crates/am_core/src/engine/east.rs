//! Chinese pattern resolver.
//!
//! Collects every classical pattern a pair of animals belongs to, then
//! picks the primary one by the fixed precedence constant. Identity is
//! checked before any table: a same-animal pair is SameAnimal and
//! nothing else, including the self-punishment animals.

use crate::catalog;
use crate::models::{ChineseAnimal, ChinesePattern};

/// Primary pattern plus the full overlay set for one animal pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub primary: ChinesePattern,
    /// Never empty; `[NoPattern]` when nothing matches.
    pub overlays: Vec<ChinesePattern>,
}

/// Resolve both animals into their classical patterns.
pub fn resolve(a: ChineseAnimal, b: ChineseAnimal) -> PatternMatch {
    if a == b {
        return PatternMatch {
            primary: ChinesePattern::SameAnimal,
            overlays: vec![ChinesePattern::SameAnimal],
        };
    }

    let mut found = Vec::new();
    if catalog::same_trine(a, b) {
        found.push(ChinesePattern::SanHe);
    }
    if catalog::pair_in(a, b, &catalog::LIU_HE_PAIRS) {
        found.push(ChinesePattern::LiuHe);
    }
    if catalog::pair_in(a, b, &catalog::LIU_CHONG_PAIRS) {
        found.push(ChinesePattern::LiuChong);
    }
    if catalog::pair_in(a, b, &catalog::LIU_HAI_PAIRS) {
        found.push(ChinesePattern::LiuHai);
    }
    if catalog::pair_in(a, b, &catalog::XING_PAIRS) {
        found.push(ChinesePattern::Xing);
    }
    if catalog::pair_in(a, b, &catalog::PO_PAIRS) {
        found.push(ChinesePattern::Po);
    }

    if found.is_empty() {
        return PatternMatch {
            primary: ChinesePattern::NoPattern,
            overlays: vec![ChinesePattern::NoPattern],
        };
    }

    // order the overlays by precedence and take the strongest claim
    let overlays: Vec<ChinesePattern> = ChinesePattern::PRIORITY
        .iter()
        .copied()
        .filter(|p| found.contains(p))
        .collect();
    let primary = overlays[0];
    PatternMatch { primary, overlays }
}

impl PatternMatch {
    /// Tension overlays riding on top of the primary pattern.
    pub fn damage_overlays(&self) -> impl Iterator<Item = ChinesePattern> + '_ {
        self.overlays.iter().copied().filter(|p| {
            matches!(p, ChinesePattern::LiuHai | ChinesePattern::Xing | ChinesePattern::Po)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_symmetric_over_all_pairs() {
        for a in ChineseAnimal::ALL {
            for b in ChineseAnimal::ALL {
                assert_eq!(resolve(a, b), resolve(b, a));
            }
        }
    }

    #[test]
    fn test_same_animal_short_circuits() {
        // Horse is a self-punishment animal classically; identity still
        // wins before any table lookup
        let result = resolve(ChineseAnimal::Horse, ChineseAnimal::Horse);
        assert_eq!(result.primary, ChinesePattern::SameAnimal);
        assert_eq!(result.overlays, vec![ChinesePattern::SameAnimal]);
    }

    #[test]
    fn test_trine_pair_is_san_he() {
        let result = resolve(ChineseAnimal::Rat, ChineseAnimal::Monkey);
        assert_eq!(result.primary, ChinesePattern::SanHe);
        assert_eq!(result.overlays, vec![ChinesePattern::SanHe]);
    }

    #[test]
    fn test_no_pattern_pair() {
        let result = resolve(ChineseAnimal::Rat, ChineseAnimal::Snake);
        assert_eq!(result.primary, ChinesePattern::NoPattern);
        assert_eq!(result.overlays, vec![ChinesePattern::NoPattern]);
    }

    #[test]
    fn test_snake_monkey_triple_overlay() {
        // Liu He + Xing + Po; harmony wins the primary slot
        let result = resolve(ChineseAnimal::Snake, ChineseAnimal::Monkey);
        assert_eq!(result.primary, ChinesePattern::LiuHe);
        assert_eq!(
            result.overlays,
            vec![ChinesePattern::LiuHe, ChinesePattern::Po, ChinesePattern::Xing]
        );
    }

    #[test]
    fn test_tiger_monkey_conflict_outranks_punishment() {
        let result = resolve(ChineseAnimal::Tiger, ChineseAnimal::Monkey);
        assert_eq!(result.primary, ChinesePattern::LiuChong);
        assert_eq!(result.overlays, vec![ChinesePattern::LiuChong, ChinesePattern::Xing]);
    }

    #[test]
    fn test_goat_dog_break_outranks_punishment() {
        let result = resolve(ChineseAnimal::Goat, ChineseAnimal::Dog);
        assert_eq!(result.primary, ChinesePattern::Po);
        assert_eq!(result.overlays, vec![ChinesePattern::Po, ChinesePattern::Xing]);
    }

    #[test]
    fn test_every_pair_resolves() {
        for a in ChineseAnimal::ALL {
            for b in ChineseAnimal::ALL {
                let result = resolve(a, b);
                assert!(!result.overlays.is_empty());
                assert_eq!(result.primary, result.overlays[0]);
            }
        }
    }
}
