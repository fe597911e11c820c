//! Equal-mass elastic collisions between balls.
//!
//! Impulses are exchanged along the line of centers only; tangential velocity
//! is untouched and overlapping balls are not pushed apart.

use bevy::prelude::*;

use crate::core::components::Ball;

#[inline]
pub fn overlapping(a: &Ball, b: &Ball) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Resolve one pair in place. Returns whether the pair overlapped.
pub fn resolve_collision(a: &mut Ball, b: &mut Ball) -> bool {
    if !overlapping(a, b) {
        return false;
    }
    // Coincident centers have no normal; nothing to exchange along.
    let n = (b.position - a.position).normalize_or_zero();
    let relative = a.velocity - b.velocity;
    let lambda = -n.dot(relative);
    let impulse = n * lambda;
    a.velocity += impulse;
    b.velocity -= impulse;
    true
}

/// Resolve ball `i` against every higher-indexed ball, in index order.
/// Velocity changes are visible to later pairs immediately.
pub fn resolve_against_later(balls: &mut [Ball], i: usize) -> usize {
    if i >= balls.len() {
        return 0;
    }
    let (head, tail) = balls.split_at_mut(i + 1);
    let a = &mut head[i];
    let mut hits = 0;
    for b in tail.iter_mut() {
        if resolve_collision(a, b) {
            hits += 1;
        }
    }
    hits
}

/// Every unordered pair `(i, j), i < j` once, sequentially.
pub fn resolve_all(balls: &mut [Ball]) -> usize {
    (0..balls.len())
        .map(|i| resolve_against_later(balls, i))
        .sum()
}
