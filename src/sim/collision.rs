//! Circle-vs-rectangle collision primitives and the player resolver
//!
//! Platforms are axis-aligned rectangles; the player is a circle. Overlap is
//! resolved as a push-out along the normal from the closest rectangle point
//! to the circle center.

use glam::Vec2;

use super::state::{Platform, PlatformKind, Player};

/// Result of a circle-vs-rectangle overlap test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Unit normal from the contact point toward the circle center
    pub normal: Vec2,
    /// Overlap depth along the normal
    pub depth: f32,
}

/// Overlap test between a circle and a platform rectangle
///
/// Returns `None` when the circle clears the rectangle. A center exactly on
/// the rectangle surface degenerates to a zero distance; the normal then
/// defaults to straight up rather than dividing by zero.
pub fn circle_rect_overlap(center: Vec2, radius: f32, platform: &Platform) -> Option<Resolution> {
    let delta = center - platform.closest_point(center);
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }
    let dist = dist_sq.sqrt();
    let normal = if dist > 0.0 { delta / dist } else { Vec2::NEG_Y };
    Some(Resolution { normal, depth: radius - dist })
}

/// Circle-vs-circle overlap, used for contact damage and coin pickup
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) < (ra + rb) * (ra + rb)
}

/// Push the player out of every overlapping platform and classify contacts
///
/// Grounded is recomputed from scratch: false unless some contact produced a
/// predominantly upward normal. Returns whether any touched platform was a
/// hazard; damage itself is applied by the stepper so the invulnerability
/// gate lives in one place.
pub fn resolve_player(player: &mut Player, platforms: &[Platform]) -> bool {
    player.grounded = false;
    let mut touched_hazard = false;

    for platform in platforms {
        let Some(contact) = circle_rect_overlap(player.pos, player.radius, platform) else {
            continue;
        };
        if platform.kind == PlatformKind::Hazard {
            touched_hazard = true;
        }

        player.pos += contact.normal * contact.depth;

        // y grows downward: an upward normal is negative y
        if contact.normal.y < -0.5 {
            player.grounded = true;
            if player.vel.y > 0.0 {
                player.vel.y = 0.0;
            }
        } else if contact.normal.y > 0.5 && player.vel.y < 0.0 {
            player.vel.y = 0.0;
        }
        if contact.normal.x.abs() > 0.5 {
            player.vel.x = 0.0;
        }
    }

    touched_hazard
}
