//! World Aggregate
//!
//! Owns the brick registry, the render batch, the current tool state, and
//! the preview brick, replacing the ambient globals of older builds. All
//! mutations go through here so the batch is rebuilt exactly once per
//! registry change and user-feedback cues are queued in one place.

use glam::Vec3;

use crate::batch::BrickBatch;
use crate::brick::{Brick, Rotation};
use crate::catalog::{BRICK_SIZES, BrickSize};
use crate::palette::BrickColor;
use crate::placement::{PlaceError, can_place, is_supported};
use crate::preview::PreviewBrick;
use crate::registry::BrickRegistry;
use crate::save::BrickRecord;
use crate::types::{Facing, RayHit};

/// Delay before the second removal acknowledgment, in seconds.
pub const REMOVE_ACK_DELAY_S: f32 = 0.2;

/// The "current brick" state the input layer mutates: which footprint,
/// color, and rotation the next placement uses.
#[derive(Debug, Clone)]
pub struct ToolState {
    pub size_index: usize,
    pub color_index: usize,
    color: BrickColor,
    pub rotation: Rotation,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            size_index: 0,
            color_index: 0,
            color: BrickColor::Default,
            rotation: Rotation::Deg0,
        }
    }
}

impl ToolState {
    pub fn size(&self) -> BrickSize {
        BRICK_SIZES[self.size_index % BRICK_SIZES.len()]
    }

    pub fn color(&self) -> BrickColor {
        self.color
    }

    /// Step the size cycle, wrapping in both directions.
    pub fn step_size(&mut self, backwards: bool) {
        self.size_index = step_index(self.size_index, BRICK_SIZES.len(), backwards);
    }

    /// Step the color cycle, wrapping in both directions.
    pub fn step_color(&mut self, backwards: bool) {
        self.color_index = step_index(self.color_index, BrickColor::CYCLE.len(), backwards);
        self.color = BrickColor::CYCLE[self.color_index];
    }
}

fn step_index(index: usize, len: usize, backwards: bool) -> usize {
    if backwards {
        (index + len - 1) % len
    } else {
        (index + 1) % len
    }
}

/// Which sound the audio collaborator should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Place,
    Remove,
}

/// A queued user-feedback cue. `delay_s` is relative to when the event was
/// drained; the host owns the actual timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioEvent {
    pub cue: AudioCue,
    pub delay_s: f32,
}

/// The world: every live brick, the batched draw data derived from them,
/// and the avatar's current build tool.
#[derive(Debug)]
pub struct World {
    registry: BrickRegistry,
    batch: BrickBatch,
    pub tool: ToolState,
    preview: PreviewBrick,
    next_id: u32,
    audio_events: Vec<AudioEvent>,
}

impl World {
    pub fn new() -> Self {
        let tool = ToolState::default();
        let preview = PreviewBrick::new(&tool);
        Self {
            registry: BrickRegistry::new(),
            batch: BrickBatch::new(),
            tool,
            preview,
            next_id: 0,
            audio_events: Vec::new(),
        }
    }

    /// Issue the next brick id: increment, then return. Ids are never
    /// reused within a world's lifetime.
    pub fn next_brick_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn registry(&self) -> &BrickRegistry {
        &self.registry
    }

    pub fn batch(&self) -> &BrickBatch {
        &self.batch
    }

    pub fn preview(&self) -> &PreviewBrick {
        &self.preview
    }

    pub fn brick_count(&self) -> usize {
        self.registry.count()
    }

    /// Validate and insert a candidate brick.
    ///
    /// Collision is checked first, then support; on success the brick is
    /// registered, the batch rebuilt, and a placement cue queued. Any
    /// failure drops the candidate and leaves the registry unchanged.
    pub fn place(&mut self, candidate: Brick) -> Result<u32, PlaceError> {
        self.place_with_feedback(candidate, true)
    }

    /// Place a brick built from the current tool state with its lower
    /// corner at `corner`.
    pub fn place_at(&mut self, corner: Vec3) -> Result<u32, PlaceError> {
        let id = self.next_brick_id();
        let brick = Brick::from_size(id, self.tool.size(), corner, self.tool.rotation, self.tool.color());
        self.place_with_feedback(brick, true)
    }

    /// Place at the preview brick's snapped corner.
    pub fn place_at_preview(&mut self) -> Result<u32, PlaceError> {
        self.place_at(self.preview.corner())
    }

    fn place_with_feedback(&mut self, candidate: Brick, audible: bool) -> Result<u32, PlaceError> {
        if !can_place(&self.registry, &candidate) {
            return Err(PlaceError::Collision);
        }
        if !is_supported(&self.registry, &candidate) {
            return Err(PlaceError::Floating);
        }
        let id = candidate.id();
        self.registry.insert(candidate);
        self.rebuild_batch();
        if audible {
            self.audio_events.push(AudioEvent {
                cue: AudioCue::Place,
                delay_s: 0.0,
            });
        }
        Ok(id)
    }

    /// Delete the brick with the given id. An unknown id is a logged no-op
    /// returning false; on success the brick's batch slot dies with it.
    pub fn delete_brick(&mut self, id: u32) -> bool {
        if self.registry.remove_by_id(id).is_none() {
            println!("[Registry] No brick found with id {id}");
            return false;
        }
        self.rebuild_batch();
        true
    }

    /// Delete every brick. Returns how many were removed; an empty world is
    /// a silent no-op. Queues the removal acknowledgment exactly twice:
    /// immediately and after [`REMOVE_ACK_DELAY_S`].
    pub fn clear_bricks(&mut self) -> usize {
        if self.registry.is_empty() {
            return 0;
        }
        let removed = self.registry.clear();
        self.rebuild_batch();
        self.audio_events.push(AudioEvent {
            cue: AudioCue::Remove,
            delay_s: 0.0,
        });
        self.audio_events.push(AudioEvent {
            cue: AudioCue::Remove,
            delay_s: REMOVE_ACK_DELAY_S,
        });
        removed
    }

    /// Rebuild the batched draw data from the registry. Called after every
    /// registry mutation; exposed so a future incremental update stays a
    /// localized change.
    pub fn rebuild_batch(&mut self) {
        self.batch.rebuild(&mut self.registry);
    }

    /// Per-frame transform refresh for bricks mutated in place.
    pub fn refresh_dirty(&mut self) {
        self.batch.refresh_dirty(&mut self.registry);
    }

    /// Queued feedback cues for the audio collaborator.
    pub fn drain_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    /// Recompute the preview's snapped position for a ray-cast result.
    pub fn update_preview(&mut self, hit: Option<&RayHit>, facing: Facing) {
        self.preview.move_to_ray(hit, &self.registry, facing);
    }

    /// Cycle the preview's yaw by 90 degrees.
    pub fn rotate_preview(&mut self) {
        self.preview.rotate(&mut self.tool);
    }

    /// Cycle the current color and rebuild the preview.
    pub fn cycle_color(&mut self, backwards: bool) {
        self.preview.next_color(&mut self.tool, backwards);
    }

    /// Cycle the current footprint and rebuild the preview.
    pub fn cycle_size(&mut self, backwards: bool) {
        self.preview.next_size(&mut self.tool, backwards);
    }

    /// Export every live brick for the save collaborator.
    pub fn export_records(&self) -> Vec<BrickRecord> {
        self.registry.iter().map(Brick::export).collect()
    }

    /// Replay placement for each record in order, returning how many were
    /// placed. Records that fail reconstruction or placement (bad
    /// dimensions, off-palette color, non-right-angle rotation, collision,
    /// floating) are silently dropped, not retried. Import queues no
    /// per-brick audio.
    pub fn import_records(&mut self, records: &[BrickRecord]) -> usize {
        let mut placed = 0;
        for record in records {
            let Some(color) =
                BrickColor::from_rgb([record.color_r, record.color_g, record.color_b])
            else {
                continue;
            };
            let Some(rotation) = Rotation::from_degrees(record.rot) else {
                continue;
            };
            let id = self.next_brick_id();
            let Ok(brick) = Brick::new(
                id,
                record.width_x,
                record.height_y,
                record.depth_z,
                Vec3::new(record.x, record.y, record.z),
                rotation,
                color,
            ) else {
                continue;
            };
            if self.place_with_feedback(brick, false).is_ok() {
                placed += 1;
            }
        }
        placed
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
