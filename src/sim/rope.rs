//! Grapple rope solver
//!
//! The rope anchors to the platform surface point nearest the cursor and
//! behaves like a one-sided spring: it pulls when stretched past its rest
//! length and never pushes.

use glam::Vec2;

use super::state::{Platform, Player, Rope};
use crate::consts::*;

/// Search all platforms for an anchor point
///
/// Each rectangle contributes its closest surface point to the cursor; a
/// candidate is accepted only within [`ROPE_SNAP_RADIUS`] of the cursor. The
/// winner is the accepted candidate nearest the player, bounded by
/// [`ROPE_MAX_RANGE`].
pub fn find_anchor(origin: Vec2, target: Vec2, platforms: &[Platform]) -> Option<Vec2> {
    let mut best: Option<Vec2> = None;
    let mut best_dist = ROPE_MAX_RANGE;

    for platform in platforms {
        let point = platform.closest_point(target);
        if point.distance(target) >= ROPE_SNAP_RADIUS {
            continue;
        }
        let dist = point.distance(origin);
        if dist < best_dist {
            best_dist = dist;
            best = Some(point);
        }
    }

    best
}

/// Attach the rope at `anchor`, taking up the slack as rest length
pub fn attach(rope: &mut Rope, anchor: Vec2, player_pos: Vec2) {
    rope.active = true;
    rope.anchor = anchor;
    rope.rest_length = anchor.distance(player_pos).max(ROPE_MIN_LENGTH);
}

/// Apply spring tension while the rope is stretched past its rest length
///
/// Proportional pull toward the anchor plus flat damping on both axes. No
/// compression force: inside the rest length the rope goes slack.
pub fn apply_tension(player: &mut Player, rope: &Rope) {
    let delta = rope.anchor - player.pos;
    let dist = delta.length();
    if dist <= rope.rest_length || dist <= f32::EPSILON {
        return;
    }
    let pull = (dist - rope.rest_length) * ROPE_STIFFNESS;
    player.vel += (delta / dist) * pull;
    player.vel *= ROPE_DAMPING;
}

/// Adjust rest length from reel input, clamped to the minimum
pub fn reel(rope: &mut Rope, reel_in: bool, reel_out: bool) {
    if reel_in {
        rope.rest_length = (rope.rest_length - ROPE_REEL_RATE).max(ROPE_MIN_LENGTH);
    }
    if reel_out {
        rope.rest_length += ROPE_REEL_RATE;
    }
}
