//! Render Batching Layer
//!
//! One draw call per brick does not scale to thousands of bricks, so every
//! live brick is flattened into a single instance buffer. The buffer is
//! rebuilt in full whenever the registry changes; per-frame refreshes only
//! touch bricks whose dirty flag is set.

use crate::palette::BrickColor;
use crate::registry::BrickRegistry;
use crate::types::BRICK_SHRINK;

/// Instance data for a single brick slot.
///
/// Layout (32 bytes total, GPU-compatible):
/// - position:     vec3<f32> (12 bytes) - Volume center in world space
/// - yaw_radians:  f32       (4 bytes)  - Rotation around Y
/// - scale:        vec3<f32> (12 bytes) - Extents with the visual shrink applied
/// - color_packed: u32       (4 bytes)  - Packed RGB: (R << 16) | (G << 8) | B
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BrickInstance {
    pub position: [f32; 3],
    pub yaw_radians: f32,
    pub scale: [f32; 3],
    pub color_packed: u32,
}

static_assertions::assert_eq_size!(BrickInstance, [u8; 32]);

impl Default for BrickInstance {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            yaw_radians: 0.0,
            scale: [1.0, 1.0, 1.0],
            color_packed: pack_color_f32(BrickColor::Default.rgb()),
        }
    }
}

/// Pack RGB components into a single u32: (R << 16) | (G << 8) | B.
#[inline]
pub fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack a u32 back into RGB components.
#[inline]
pub fn unpack_color(packed: u32) -> (u8, u8, u8) {
    (
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

fn pack_color_f32(rgb: [f32; 3]) -> u32 {
    pack_color(
        (rgb[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb[2].clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// The single merged drawable representing all live bricks.
#[derive(Debug, Default)]
pub struct BrickBatch {
    instances: Vec<BrickInstance>,
    always_visible: bool,
}

impl BrickBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw away the previous batch and build a fresh slot per live brick.
    ///
    /// Disposing an empty batch is a non-error. Each brick records the slot
    /// now representing it; stale slot ids from earlier rebuilds are wiped
    /// first. An empty registry produces an empty, invisible batch.
    pub fn rebuild(&mut self, registry: &mut BrickRegistry) {
        self.instances.clear();
        self.always_visible = false;
        for brick in registry.iter_mut() {
            brick.batch_slot = None;
        }
        if registry.is_empty() {
            return;
        }
        for (slot, brick) in registry.iter_mut().enumerate() {
            brick.batch_slot = Some(slot as u32);
            self.instances.push(BrickInstance::default());
        }
        self.refresh(registry);
        self.always_visible = true;
    }

    /// Copy position, rotation, shrunk scale, and color from every owning
    /// brick into its slot. A slot whose brick cannot be found is a logged
    /// skip; the mapping self-heals on the next rebuild.
    pub fn refresh(&mut self, registry: &mut BrickRegistry) {
        for slot in 0..self.instances.len() as u32 {
            let Some(brick) = registry.get_by_batch_slot(slot) else {
                println!("[Batch] No matching brick for slot {slot}, skipping");
                continue;
            };
            self.instances[slot as usize] = Self::instance_for(brick);
        }
        for brick in registry.iter_mut() {
            brick.clear_dirty();
        }
    }

    /// Like [`refresh`](Self::refresh), but only recomputes slots whose
    /// brick is marked dirty, clearing the flag.
    pub fn refresh_dirty(&mut self, registry: &mut BrickRegistry) {
        for brick in registry.iter_mut() {
            if !brick.is_dirty() {
                continue;
            }
            let Some(slot) = brick.batch_slot else {
                continue;
            };
            if let Some(instance) = self.instances.get_mut(slot as usize) {
                *instance = Self::instance_for(brick);
                brick.clear_dirty();
            }
        }
    }

    fn instance_for(brick: &crate::brick::Brick) -> BrickInstance {
        let center = brick.center();
        let (fx, fz) = brick.footprint();
        BrickInstance {
            position: [center.x, center.y, center.z],
            yaw_radians: brick.rotation().radians(),
            scale: [
                fx * BRICK_SHRINK,
                brick.height_y() as f32 * BRICK_SHRINK,
                fz * BRICK_SHRINK,
            ],
            color_packed: pack_color_f32(brick.color().rgb()),
        }
    }

    pub fn instances(&self) -> &[BrickInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn always_visible(&self) -> bool {
        self.always_visible
    }
}
