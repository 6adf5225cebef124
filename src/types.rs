//! Geometry Primitives and World Constants
//!
//! Shared types for the placement engine: axis-aligned bounding boxes,
//! interpreted ray-cast results, and the coarse 4-way avatar facing used
//! for side-face snapping.

use glam::Vec3;

/// Per-axis shrink applied to brick volumes, both for collision testing
/// (avoids floating-point false positives on touching faces) and for the
/// batched render scale (visually separates adjacent faces).
pub const BRICK_SHRINK: f32 = 0.99;

/// Edge length of the flat ground plane, in grid units.
pub const GROUND_SIZE: f32 = 100.0;

/// Upper bound on live bricks the batch layer is sized for.
pub const MAX_BRICKS: usize = 5000;

/// A ray hit within this distance of a brick's top face snaps the preview
/// on top instead of to the side.
pub const SNAP_TOP_TOLERANCE: f32 = 0.1;

/// Interval of the host's autosave timer, in seconds.
pub const AUTOSAVE_INTERVAL_S: f32 = 10.0;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Volume overlap test. Strict inequalities on every axis, so two boxes
    /// sharing exactly one face do NOT intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Returns a copy scaled about the center by `factor`. The original box
    /// is untouched, so collision tests never leave state to revert.
    pub fn shrunk(&self, factor: f32) -> Aabb {
        let center = self.center();
        let half = self.size() * 0.5 * factor;
        Aabb {
            min: center - half,
            max: center + half,
        }
    }
}

/// Interpreted result of a ray cast performed by the rendering collaborator.
///
/// The core never casts rays against raw geometry; the host resolves the hit
/// and reports the point plus the id of the brick occupying the hit surface,
/// or `None` if the surface is the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub brick: Option<u32>,
}

/// Coarse 4-way avatar facing, snapped from yaw.
///
/// Decides which side of a target brick a new brick snaps to when the ray
/// hits a side face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// +Z
    North,
    /// +X
    East,
    /// -Z
    South,
    /// -X
    West,
}

impl Facing {
    /// Snap a yaw angle in degrees to the nearest cardinal facing.
    ///
    /// Negative angles are pushed positive first; the quadrant boundaries
    /// follow the avatar controller: (315, 45] is north, (45, 135] east,
    /// (135, 225] south, the rest west.
    pub fn from_yaw_degrees(yaw: f32) -> Self {
        let mut degrees = yaw % 360.0;
        if degrees < 0.0 {
            degrees += 360.0;
        }
        if degrees > 315.0 || degrees <= 45.0 {
            Facing::North
        } else if degrees <= 135.0 {
            Facing::East
        } else if degrees <= 225.0 {
            Facing::South
        } else {
            Facing::West
        }
    }

    /// Unit vector pointing the way the avatar faces.
    pub fn offset(self) -> Vec3 {
        match self {
            Facing::North => Vec3::new(0.0, 0.0, 1.0),
            Facing::East => Vec3::new(1.0, 0.0, 0.0),
            Facing::South => Vec3::new(0.0, 0.0, -1.0),
            Facing::West => Vec3::new(-1.0, 0.0, 0.0),
        }
    }
}
