//! Preview Brick
//!
//! A translucent, non-colliding brick showing where a real brick would
//! land. It is never registered; it holds a brick-shaped value plus the
//! preview flags, and is destroyed and recreated whenever the current
//! size, color, or rotation changes, carrying its last position over.

use glam::Vec3;

use crate::brick::Brick;
use crate::registry::BrickRegistry;
use crate::types::{Facing, RayHit, SNAP_TOP_TOLERANCE};
use crate::world::ToolState;

/// The single preview brick owned by the active avatar.
#[derive(Debug, Clone)]
pub struct PreviewBrick {
    brick: Brick,
    last_corner: Vec3,
    active: bool,
    /// Rendered semi-transparent. Always true.
    pub translucent: bool,
    /// Excluded from collision. Always true.
    pub non_colliding: bool,
    pub alpha: f32,
}

impl PreviewBrick {
    /// Build from the current tool state. Starts idle at the origin.
    pub fn new(tool: &ToolState) -> Self {
        Self {
            brick: Brick::from_size(0, tool.size(), Vec3::ZERO, tool.rotation, tool.color()),
            last_corner: Vec3::ZERO,
            active: false,
            translucent: true,
            non_colliding: true,
            alpha: 0.5,
        }
    }

    pub fn brick(&self) -> &Brick {
        &self.brick
    }

    /// False while no ray has hit anything yet.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Lower corner the next placement would use.
    pub fn corner(&self) -> Vec3 {
        self.brick.position()
    }

    /// Constrain a raw ray hit to a legal preview corner.
    ///
    /// A ground hit floors all three coordinates and clamps to the surface.
    /// A brick hit floors X/Z and either snaps flush on the hit brick's top
    /// face (when the hit point is near it) or treats it as a side-face hit
    /// and steps one grid unit opposite the avatar facing, so the preview
    /// lands beside the brick rather than inside it.
    pub fn fix_pos(point: Vec3, hit_brick: Option<&Brick>, facing: Facing) -> Vec3 {
        let mut pos = point;
        match hit_brick {
            None => {
                pos.x = pos.x.floor();
                pos.y = pos.y.floor();
                pos.z = pos.z.floor();
                if pos.y < 0.0 {
                    pos.y = 0.0;
                }
            }
            Some(target) => {
                pos.x = pos.x.floor();
                pos.z = pos.z.floor();
                let top_y = target.aabb().max.y;
                if top_y - pos.y < SNAP_TOP_TOLERANCE {
                    pos.y = top_y;
                } else {
                    let dir = facing.offset();
                    pos.y = pos.y.floor();
                    pos.x -= dir.x;
                    pos.z -= dir.z;
                }
            }
        }
        pos
    }

    /// Move the preview to the snapped position for a ray-cast result.
    /// No hit leaves the preview where it was.
    pub fn move_to_ray(
        &mut self,
        hit: Option<&RayHit>,
        registry: &BrickRegistry,
        facing: Facing,
    ) {
        let Some(hit) = hit else {
            return;
        };
        let hit_brick = hit.brick.and_then(|id| registry.get(id));
        let corner = Self::fix_pos(hit.point, hit_brick, facing);
        self.brick.set_x(corner.x);
        self.brick.set_y(corner.y);
        self.brick.set_z(corner.z);
        self.brick.snap_to_grid();
        self.last_corner = self.brick.position();
        self.active = true;
    }

    /// Destroy and recreate from the current tool state, carrying the last
    /// position over and re-conforming to the grid.
    pub fn rebuild(&mut self, tool: &ToolState) {
        let corner = self.last_corner;
        let active = self.active;
        self.brick = Brick::from_size(0, tool.size(), corner, tool.rotation, tool.color());
        self.brick.snap_to_grid();
        self.last_corner = self.brick.position();
        self.active = active;
    }

    /// Cycle yaw by +90 degrees about the volume center. Square footprints
    /// look the same rotated, so they skip. Grid alignment is restored by
    /// the snap inside [`rebuild`](Self::rebuild).
    pub fn rotate(&mut self, tool: &mut ToolState) {
        if tool.size().is_square() {
            return;
        }
        tool.rotation = tool.rotation.next();
        self.rebuild(tool);
    }

    /// Advance (or retreat) the color cycle and rebuild.
    pub fn next_color(&mut self, tool: &mut ToolState, backwards: bool) {
        tool.step_color(backwards);
        self.rebuild(tool);
    }

    /// Advance (or retreat) the size cycle and rebuild.
    pub fn next_size(&mut self, tool: &mut ToolState, backwards: bool) {
        tool.step_size(backwards);
        self.rebuild(tool);
    }
}
