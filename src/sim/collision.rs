//! Circle-circle collision tests
//!
//! Everything in the arena is a circle, so collision reduces to one edge-gap
//! measure used for both projectile hits and the player-reach test, plus the
//! viewport bounds check that expires stray projectiles.

use glam::Vec2;

/// Gap between the edges of two circles
///
/// Negative means the circles overlap. The same measure drives the
/// projectile hit test and (with `REACH_MARGIN` added) the reach test.
#[inline]
pub fn hit_distance(a: Vec2, ra: f32, b: Vec2, rb: f32) -> f32 {
    a.distance(b) - (ra + rb)
}

/// True once a point has left the [0,W] x [0,H] viewport
///
/// No margin: the check is on the center point, matching the projectile
/// expiry rule.
#[inline]
pub fn out_of_bounds(pos: Vec2, view: Vec2) -> bool {
    pos.x < 0.0 || pos.x > view.x || pos.y < 0.0 || pos.y > view.y
}
