//! Per-query resolution context.

use crate::engine::east::{self, PatternMatch};
use crate::engine::west::{self, WesternRelations};
use crate::models::{Profile, WuXingRelation};

/// Everything derived from the two profiles, bundled once per query.
/// Built fresh for each call and never shared or mutated.
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub profile_a: Profile,
    pub profile_b: Profile,
    pub west: WesternRelations,
    pub east: PatternMatch,
    pub wu_xing: WuXingRelation,
    pub same_sign: bool,
    pub same_animal: bool,
}

impl MatchContext {
    pub fn resolve(a: &Profile, b: &Profile) -> MatchContext {
        MatchContext {
            profile_a: *a,
            profile_b: *b,
            west: west::resolve(a.sign, b.sign),
            east: east::resolve(a.animal, b.animal),
            wu_xing: WuXingRelation::between(a.year_element, b.year_element),
            same_sign: a.sign == b.sign,
            same_animal: a.animal == b.animal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChineseAnimal, ChinesePattern, WestRelation, WesternSign};

    #[test]
    fn test_resolve_bundles_all_relations() {
        let a = Profile::new(WesternSign::Aquarius, ChineseAnimal::Rat);
        let b = Profile::new(WesternSign::Gemini, ChineseAnimal::Monkey);
        let ctx = MatchContext::resolve(&a, &b);
        assert_eq!(ctx.east.primary, ChinesePattern::SanHe);
        assert_eq!(ctx.west.west_relation, WestRelation::SameElement);
        assert_eq!(ctx.wu_xing, WuXingRelation::Other);
        assert!(!ctx.same_sign);
        assert!(!ctx.same_animal);
    }
}
