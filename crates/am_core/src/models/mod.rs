//! Core value types: signs, animals, relations, patterns, tiers.

pub mod animal;
pub mod pattern;
pub mod profile;
pub mod relations;
pub mod sign;
pub mod tier;
pub mod wuxing;

pub use animal::{ChineseAnimal, Trine};
pub use pattern::ChinesePattern;
pub use profile::{MatchResult, Profile};
pub use relations::{AspectRelation, ElementRelation, WestRelation};
pub use sign::{WesternElement, WesternSign};
pub use tier::Tier;
pub use wuxing::{WuXingElement, WuXingRelation};
