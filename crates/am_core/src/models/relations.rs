//! Derived pairwise relations on the Western side.
//!
//! All three relation kinds are symmetric: swapping the two inputs never
//! changes the result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::sign::WesternElement;

/// Relation between two Western elements, via the fixed compatibility
/// table (Fire↔Air and Earth↔Water compatible; Fire↔Earth and Air↔Water
/// semi; Fire↔Water and Air↔Earth clash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Same,
    Compatible,
    SemiCompatible,
    Clash,
}

/// Geometric aspect between two signs, from the minimal circular
/// distance of their ordinals (0..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AspectRelation {
    SameSign,
    Opposition,
    Square,
    Trine,
    Sextile,
    Other,
}

/// Single Western bucket fed into the score blender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WestRelation {
    SameSign,
    SameElement,
    CompatibleElement,
    SemiCompatible,
    Opposing,
}

impl ElementRelation {
    pub fn between(a: WesternElement, b: WesternElement) -> ElementRelation {
        use WesternElement::*;
        match (a, b) {
            (Fire, Fire) | (Earth, Earth) | (Air, Air) | (Water, Water) => ElementRelation::Same,
            (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => {
                ElementRelation::Compatible
            }
            (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => {
                ElementRelation::SemiCompatible
            }
            (Fire, Water) | (Water, Fire) | (Air, Earth) | (Earth, Air) => ElementRelation::Clash,
        }
    }
}

impl AspectRelation {
    /// Aspect for a minimal circular distance `d` in 0..=6.
    pub fn from_distance(d: u8) -> AspectRelation {
        match d {
            0 => AspectRelation::SameSign,
            6 => AspectRelation::Opposition,
            3 => AspectRelation::Square,
            4 => AspectRelation::Trine,
            2 => AspectRelation::Sextile,
            _ => AspectRelation::Other,
        }
    }

    /// Soft aspects ease a bond; used by the star-rating tweaks.
    pub fn is_soft(&self) -> bool {
        matches!(self, AspectRelation::Trine | AspectRelation::Sextile)
    }

    /// Hard aspects add friction; used by the star-rating tweaks.
    pub fn is_hard(&self) -> bool {
        matches!(self, AspectRelation::Square | AspectRelation::Opposition)
    }
}

impl WestRelation {
    /// Strong Western backing: shared or compatible element, short of a
    /// full mirror.
    pub fn is_strong(&self) -> bool {
        matches!(self, WestRelation::SameElement | WestRelation::CompatibleElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sign::WesternElement;

    const ELEMENTS: [WesternElement; 4] = [
        WesternElement::Fire,
        WesternElement::Earth,
        WesternElement::Air,
        WesternElement::Water,
    ];

    #[test]
    fn test_element_relation_symmetric_and_total() {
        for a in ELEMENTS {
            for b in ELEMENTS {
                assert_eq!(ElementRelation::between(a, b), ElementRelation::between(b, a));
            }
        }
    }

    #[test]
    fn test_element_relation_table() {
        use WesternElement::*;
        assert_eq!(ElementRelation::between(Fire, Fire), ElementRelation::Same);
        assert_eq!(ElementRelation::between(Fire, Air), ElementRelation::Compatible);
        assert_eq!(ElementRelation::between(Earth, Water), ElementRelation::Compatible);
        assert_eq!(ElementRelation::between(Fire, Earth), ElementRelation::SemiCompatible);
        assert_eq!(ElementRelation::between(Air, Water), ElementRelation::SemiCompatible);
        assert_eq!(ElementRelation::between(Fire, Water), ElementRelation::Clash);
        assert_eq!(ElementRelation::between(Air, Earth), ElementRelation::Clash);
    }

    #[test]
    fn test_aspect_from_distance() {
        assert_eq!(AspectRelation::from_distance(0), AspectRelation::SameSign);
        assert_eq!(AspectRelation::from_distance(6), AspectRelation::Opposition);
        assert_eq!(AspectRelation::from_distance(3), AspectRelation::Square);
        assert_eq!(AspectRelation::from_distance(4), AspectRelation::Trine);
        assert_eq!(AspectRelation::from_distance(2), AspectRelation::Sextile);
        assert_eq!(AspectRelation::from_distance(1), AspectRelation::Other);
        assert_eq!(AspectRelation::from_distance(5), AspectRelation::Other);
    }
}
