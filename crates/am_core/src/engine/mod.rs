//! The compatibility rule engine: resolvers, blender, classifier.
//!
//! Everything in here is a pure function over the finite sign/animal
//! alphabets. No I/O, no shared state; every evaluation is independent
//! and may run on any thread.

pub mod blend;
pub mod classify;
pub mod context;
pub mod east;
pub mod stars;
pub mod west;

pub use context::MatchContext;
pub use east::PatternMatch;
pub use west::WesternRelations;

use crate::models::{MatchResult, Profile};

/// Evaluate one pair of profiles end to end.
pub fn evaluate(a: &Profile, b: &Profile) -> MatchResult {
    let ctx = MatchContext::resolve(a, b);
    let score = blend::blend(&ctx);
    let tier = classify::classify(score, ctx.east.primary, ctx.same_sign, ctx.same_animal);
    let stars =
        stars::star_ratings(ctx.east.primary, score, ctx.west.aspect, ctx.same_sign);

    MatchResult {
        score,
        tier,
        primary_pattern: ctx.east.primary,
        overlay_patterns: ctx.east.overlays,
        element_relation: ctx.west.element_relation,
        aspect_relation: ctx.west.aspect,
        same_sign: ctx.same_sign,
        same_animal: ctx.same_animal,
        chemistry_stars: stars.chemistry,
        stability_stars: stars.stability,
    }
}
