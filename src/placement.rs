//! Placement Validation
//!
//! Decides whether a candidate brick may occupy space: its volume must be
//! free of collisions with every live brick, and manually placed bricks
//! must rest on the ground or on something solid.

use crate::brick::Brick;
use crate::registry::BrickRegistry;
use crate::types::BRICK_SHRINK;

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The candidate's volume overlaps an existing brick.
    Collision,
    /// Nothing solid directly beneath and not on the ground.
    Floating,
}

/// True when the candidate's volume is free to occupy.
///
/// False when the lower corner is underground, or when the shrunk volume
/// intersects any other live brick's shrunk volume. The shrink is applied
/// to value copies, so touching faces never register as collisions and no
/// registered brick is ever left scaled.
pub fn can_place(registry: &BrickRegistry, candidate: &Brick) -> bool {
    if candidate.position().y < 0.0 {
        return false;
    }
    let volume = candidate.aabb().shrunk(BRICK_SHRINK);
    for brick in registry.iter() {
        if brick.id() == candidate.id() {
            continue;
        }
        if volume.intersects(&brick.aabb().shrunk(BRICK_SHRINK)) {
            return false;
        }
    }
    true
}

/// True when the candidate rests on the ground, or when a probe volume one
/// grid unit directly below (same footprint and rotation) is already
/// occupied. The probe is a local value and is never registered.
pub fn is_supported(registry: &BrickRegistry, candidate: &Brick) -> bool {
    if candidate.position().y <= 0.0 {
        return true;
    }
    let mut probe = candidate.clone();
    probe.set_y(candidate.position().y - 1.0);
    !can_place(registry, &probe)
}
