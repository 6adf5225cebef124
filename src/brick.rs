//! Brick - the placement primitive
//!
//! One placed unit volume: dimensions, grid position, yaw rotation, palette
//! color, and the batch slot currently representing it. Positions are stored
//! as the center of the occupied volume; the public accessors speak in terms
//! of the lower corner, which is what snaps to the grid.

use glam::Vec3;

use crate::catalog::BrickSize;
use crate::palette::BrickColor;
use crate::save::BrickRecord;
use crate::types::Aabb;

/// Errors raised by brick construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickError {
    /// A dimension was zero at construction.
    InvalidDimensions,
    /// A raw RGB tuple did not match any palette entry.
    InvalidColor,
}

/// Yaw rotation, restricted to right angles around the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Advance by 90 degrees, wrapping.
    pub fn next(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> f32 {
        match self {
            Rotation::Deg0 => 0.0,
            Rotation::Deg90 => 90.0,
            Rotation::Deg180 => 180.0,
            Rotation::Deg270 => 270.0,
        }
    }

    pub fn radians(self) -> f32 {
        self.degrees().to_radians()
    }

    /// Snap an angle in degrees to a right-angle rotation. `None` when the
    /// angle is not within one degree of a quadrant; loaded records with
    /// arbitrary angles are dropped rather than guessed at.
    pub fn from_degrees(degrees: f32) -> Option<Rotation> {
        let mut d = degrees % 360.0;
        if d < 0.0 {
            d += 360.0;
        }
        for rot in [
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg270,
        ] {
            if (d - rot.degrees()).abs() < 1.0 {
                return Some(rot);
            }
        }
        // 359.5 wraps to Deg0
        if (d - 360.0).abs() < 1.0 { Some(Rotation::Deg0) } else { None }
    }

    /// True when the world-space footprint swaps width and depth.
    pub fn swaps_footprint(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// A single rectangular unit volume placed in the world grid.
#[derive(Debug, Clone)]
pub struct Brick {
    id: u32,
    width_x: u32,
    height_y: u32,
    depth_z: u32,
    /// Center of the occupied volume.
    center: Vec3,
    rotation: Rotation,
    color: BrickColor,
    /// Slot in the render batch currently representing this brick, assigned
    /// on every batch rebuild.
    pub batch_slot: Option<u32>,
    /// Set by every mutator; the batch layer recomputes transforms for dirty
    /// bricks only, then clears it.
    dirty: bool,
}

impl Brick {
    /// Construct a brick whose occupied volume's lower corner is `corner`.
    ///
    /// Fails with [`BrickError::InvalidDimensions`] if any dimension is zero.
    pub fn new(
        id: u32,
        width_x: u32,
        height_y: u32,
        depth_z: u32,
        corner: Vec3,
        rotation: Rotation,
        color: BrickColor,
    ) -> Result<Brick, BrickError> {
        if width_x == 0 || height_y == 0 || depth_z == 0 {
            return Err(BrickError::InvalidDimensions);
        }
        Ok(Self::build(id, width_x, height_y, depth_z, corner, rotation, color))
    }

    /// Construct from a catalog entry. Catalog sizes are positive by
    /// construction, so this cannot fail.
    pub fn from_size(
        id: u32,
        size: BrickSize,
        corner: Vec3,
        rotation: Rotation,
        color: BrickColor,
    ) -> Brick {
        Self::build(
            id,
            size.width_x,
            size.height_y,
            size.depth_z,
            corner,
            rotation,
            color,
        )
    }

    fn build(
        id: u32,
        width_x: u32,
        height_y: u32,
        depth_z: u32,
        corner: Vec3,
        rotation: Rotation,
        color: BrickColor,
    ) -> Brick {
        let center = corner
            + Vec3::new(
                width_x as f32 / 2.0,
                height_y as f32 / 2.0,
                depth_z as f32 / 2.0,
            );
        Brick {
            id,
            width_x,
            height_y,
            depth_z,
            center,
            rotation,
            color,
            batch_slot: None,
            dirty: true,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn width_x(&self) -> u32 {
        self.width_x
    }

    pub fn height_y(&self) -> u32 {
        self.height_y
    }

    pub fn depth_z(&self) -> u32 {
        self.depth_z
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn color(&self) -> BrickColor {
        self.color
    }

    /// Center of the occupied volume.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Lower-corner position, the inverse of the create-time adjustment.
    ///
    /// Derived from the unrotated dimensions, so it is independent of the
    /// current rotation.
    pub fn position(&self) -> Vec3 {
        self.center
            - Vec3::new(
                self.width_x as f32 / 2.0,
                self.height_y as f32 / 2.0,
                self.depth_z as f32 / 2.0,
            )
    }

    /// Move so the lower corner sits at `x` on that axis.
    pub fn set_x(&mut self, x: f32) {
        self.center.x = x + self.width_x as f32 / 2.0;
        self.dirty = true;
    }

    /// Move so the lower corner sits at `y` on that axis.
    pub fn set_y(&mut self, y: f32) {
        self.center.y = y + self.height_y as f32 / 2.0;
        self.dirty = true;
    }

    /// Move so the lower corner sits at `z` on that axis.
    pub fn set_z(&mut self, z: f32) {
        self.center.z = z + self.depth_z as f32 / 2.0;
        self.dirty = true;
    }

    /// Change orientation. The pivot is always the volume's geometric
    /// center, so the center position is unchanged and the footprint simply
    /// swaps extents under 90/270.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        self.dirty = true;
    }

    pub fn set_color(&mut self, color: BrickColor) {
        self.color = color;
        self.dirty = true;
    }

    /// Set the color from a raw RGB tuple. Off-palette values abort with
    /// [`BrickError::InvalidColor`] and the prior color is retained.
    pub fn set_color_rgb(&mut self, rgb: [f32; 3]) -> Result<(), BrickError> {
        match BrickColor::from_rgb(rgb) {
            Some(color) => {
                self.set_color(color);
                Ok(())
            }
            None => Err(BrickError::InvalidColor),
        }
    }

    /// World-space X/Z extents of the footprint under the current rotation.
    pub fn footprint(&self) -> (f32, f32) {
        if self.rotation.swaps_footprint() {
            (self.depth_z as f32, self.width_x as f32)
        } else {
            (self.width_x as f32, self.depth_z as f32)
        }
    }

    /// World-space occupied volume, consistent with position + dimensions +
    /// rotation after any sequence of mutations.
    pub fn aabb(&self) -> Aabb {
        let (fx, fz) = self.footprint();
        let half = Vec3::new(fx / 2.0, self.height_y as f32 / 2.0, fz / 2.0);
        Aabb::new(self.center - half, self.center + half)
    }

    /// Slide on X/Z so the world AABB's lower corner lands on integer grid
    /// lines. After a center rotation of a non-square brick the corner can
    /// sit on a half unit; flooring it here re-conforms the footprint to
    /// whole grid cells.
    pub fn snap_to_grid(&mut self) {
        let aabb = self.aabb();
        self.center.x -= aabb.min.x - aabb.min.x.floor();
        self.center.z -= aabb.min.z - aabb.min.z.floor();
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Persisted record for the save/load collaborator.
    pub fn export(&self) -> BrickRecord {
        let pos = self.position();
        let [r, g, b] = self.color.rgb();
        BrickRecord {
            name: format!("Brick{}x{}", self.width_x, self.depth_z),
            width_x: self.width_x,
            height_y: self.height_y,
            depth_z: self.depth_z,
            x: pos.x,
            y: pos.y,
            z: pos.z,
            color_r: r,
            color_g: g,
            color_b: b,
            rot: self.rotation.degrees(),
        }
    }
}
