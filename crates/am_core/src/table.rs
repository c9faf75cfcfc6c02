//! Precomputed result matrix.
//!
//! Both input alphabets are finite, so the whole no-year-element result
//! space is only 12 x 12 x 12 x 12 = 20,736 entries. It is materialized
//! once on first use and served by O(1) lookup; queries carrying year
//! elements fall back to the live engine.

use once_cell::sync::Lazy;

use crate::engine;
use crate::models::{ChineseAnimal, MatchResult, Profile, WesternSign};

static MATRIX: Lazy<Vec<MatchResult>> = Lazy::new(|| {
    let mut results = Vec::with_capacity(12 * 12 * 12 * 12);
    for sign_a in WesternSign::ALL {
        for animal_a in ChineseAnimal::ALL {
            for sign_b in WesternSign::ALL {
                for animal_b in ChineseAnimal::ALL {
                    results.push(engine::evaluate(
                        &Profile::new(sign_a, animal_a),
                        &Profile::new(sign_b, animal_b),
                    ));
                }
            }
        }
    }
    results
});

fn index(sign_a: WesternSign, animal_a: ChineseAnimal, sign_b: WesternSign, animal_b: ChineseAnimal) -> usize {
    (((sign_a.ordinal() as usize * 12) + animal_a.ordinal() as usize) * 12
        + sign_b.ordinal() as usize)
        * 12
        + animal_b.ordinal() as usize
}

/// Precomputed result for a pair without year elements.
pub fn lookup(
    sign_a: WesternSign,
    animal_a: ChineseAnimal,
    sign_b: WesternSign,
    animal_b: ChineseAnimal,
) -> &'static MatchResult {
    &MATRIX[index(sign_a, animal_a, sign_b, animal_b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_live_engine() {
        for sign_a in WesternSign::ALL {
            for animal_a in ChineseAnimal::ALL {
                for sign_b in WesternSign::ALL {
                    for animal_b in ChineseAnimal::ALL {
                        let cached = lookup(sign_a, animal_a, sign_b, animal_b);
                        let live = engine::evaluate(
                            &Profile::new(sign_a, animal_a),
                            &Profile::new(sign_b, animal_b),
                        );
                        assert_eq!(*cached, live);
                    }
                }
            }
        }
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let a = lookup(WesternSign::Virgo, ChineseAnimal::Dog, WesternSign::Pisces, ChineseAnimal::Rabbit);
        let b = lookup(WesternSign::Pisces, ChineseAnimal::Rabbit, WesternSign::Virgo, ChineseAnimal::Dog);
        assert_eq!(a, b);
    }
}
