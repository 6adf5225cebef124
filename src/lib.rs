//! Brickyard - grid-based brick building sandbox core
//!
//! The engine behind a first-person "LEGO builder": unit bricks are placed
//! on an integer grid, collision and support rules decide whether a
//! candidate brick may occupy space, and all live bricks are flattened into
//! one batched instance buffer for rendering.
//!
//! # Modules
//!
//! - [`types`] - Geometry primitives (AABB, ray hits, avatar facing) and world constants
//! - [`palette`] - The closed set of permitted brick colors
//! - [`catalog`] - The closed set of brick footprints
//! - [`brick`] - The placement primitive: dimensions, position, rotation, color
//! - [`registry`] - The authoritative collection of placed bricks
//! - [`placement`] - Collision and support validation
//! - [`batch`] - Batched instance data rebuilt from the registry
//! - [`preview`] - The translucent preview brick snapped to the aim point
//! - [`world`] - The aggregate owning registry, tool state, preview, and batch
//! - [`save`] - Persisted brick records (JSON, string-coercible numerics)
//!
//! # Example
//!
//! ```
//! use brickyard::world::World;
//! use glam::Vec3;
//!
//! let mut world = World::new();
//! let id = world.place_at(Vec3::new(0.0, 0.0, 0.0)).unwrap();
//! assert_eq!(world.brick_count(), 1);
//! world.delete_brick(id);
//! assert_eq!(world.brick_count(), 0);
//! ```

pub mod batch;
pub mod brick;
pub mod catalog;
pub mod palette;
pub mod placement;
pub mod preview;
pub mod registry;
pub mod save;
pub mod types;
pub mod world;

pub use batch::{BrickBatch, BrickInstance, pack_color, unpack_color};
pub use brick::{Brick, BrickError, Rotation};
pub use catalog::{BRICK_SIZES, BrickSize};
pub use palette::BrickColor;
pub use placement::{PlaceError, can_place, is_supported};
pub use registry::BrickRegistry;
pub use preview::PreviewBrick;
pub use save::BrickRecord;
pub use types::{Aabb, Facing, RayHit};
pub use world::{AudioCue, AudioEvent, ToolState, World};
