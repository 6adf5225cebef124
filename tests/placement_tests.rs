//! Placement Tests - Collision, Support, and Registry Consistency
//!
//! End-to-end tests for the placement engine: the collision and support
//! rules, the registry count invariants, and the batch mapping that is
//! rebuilt on every mutation.

use brickyard::brick::{Brick, Rotation};
use brickyard::palette::BrickColor;
use brickyard::placement::{PlaceError, can_place};
use brickyard::types::BRICK_SHRINK;
use brickyard::world::World;
use glam::Vec3;

// ============================================================================
// Placement Scenarios
// ============================================================================

#[test]
fn test_duplicate_cell_rejected_then_adjacent_accepted() {
    let mut world = World::new();
    world.place_at(Vec3::new(0.0, 0.0, 0.0)).unwrap();

    assert_eq!(
        world.place_at(Vec3::new(0.0, 0.0, 0.0)),
        Err(PlaceError::Collision)
    );
    assert!(world.place_at(Vec3::new(1.0, 0.0, 0.0)).is_ok());
    assert_eq!(world.brick_count(), 2);
}

#[test]
fn test_floating_brick_rejected() {
    let mut world = World::new();
    assert_eq!(
        world.place_at(Vec3::new(5.0, 3.0, 5.0)),
        Err(PlaceError::Floating)
    );
    assert_eq!(world.brick_count(), 0);
}

#[test]
fn test_stacking_directly_on_top_accepted() {
    let mut world = World::new();
    world.place_at(Vec3::new(0.0, 0.0, 0.0)).unwrap();
    assert!(world.place_at(Vec3::new(0.0, 1.0, 0.0)).is_ok());
    assert_eq!(world.brick_count(), 2);
}

#[test]
fn test_face_touching_neighbors_both_succeed() {
    let mut world = World::new();
    assert!(world.place_at(Vec3::new(0.0, 0.0, 0.0)).is_ok());
    assert!(world.place_at(Vec3::new(1.0, 0.0, 0.0)).is_ok());
    assert!(world.place_at(Vec3::new(0.0, 0.0, 1.0)).is_ok());
    assert_eq!(world.brick_count(), 3);
}

#[test]
fn test_underground_placement_rejected() {
    let mut world = World::new();
    assert_eq!(
        world.place_at(Vec3::new(0.0, -1.0, 0.0)),
        Err(PlaceError::Collision)
    );
}

// ============================================================================
// Collision Properties
// ============================================================================

#[test]
fn test_collision_check_is_symmetric() {
    let mut world_a = World::new();
    world_a.place_at(Vec3::new(0.0, 0.0, 0.0)).unwrap();
    let candidate_b = Brick::new(
        99,
        1,
        1,
        1,
        Vec3::new(3.0, 0.0, 0.0),
        Rotation::Deg0,
        BrickColor::Red,
    )
    .unwrap();
    assert!(can_place(world_a.registry(), &candidate_b));

    let mut world_b = World::new();
    world_b.place_at(Vec3::new(3.0, 0.0, 0.0)).unwrap();
    let candidate_a = Brick::new(
        99,
        1,
        1,
        1,
        Vec3::new(0.0, 0.0, 0.0),
        Rotation::Deg0,
        BrickColor::Red,
    )
    .unwrap();
    assert!(can_place(world_b.registry(), &candidate_a));
}

#[test]
fn test_no_overlap_invariant_after_place_sequence() {
    let mut world = World::new();
    // A mix of footprints: a row, a stack, and a rotated long brick
    world.place_at(Vec3::new(0.0, 0.0, 0.0)).unwrap();
    world.place_at(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    world.place_at(Vec3::new(0.0, 1.0, 0.0)).unwrap();
    world.tool.size_index = 1; // 2x1
    world.place_at(Vec3::new(3.0, 0.0, 0.0)).unwrap();
    world.tool.rotation = Rotation::Deg90;
    world.place_at(Vec3::new(6.0, 0.0, 0.0)).unwrap();

    let bricks: Vec<&Brick> = world.registry().iter().collect();
    for (i, a) in bricks.iter().enumerate() {
        for b in bricks.iter().skip(i + 1) {
            let va = a.aabb().shrunk(BRICK_SHRINK);
            let vb = b.aabb().shrunk(BRICK_SHRINK);
            assert!(
                !va.intersects(&vb),
                "bricks {} and {} overlap",
                a.id(),
                b.id()
            );
        }
    }
}

// ============================================================================
// Registry Count and Deletion
// ============================================================================

#[test]
fn test_count_tracks_places_and_clear() {
    let mut world = World::new();
    for x in 0..5 {
        world.place_at(Vec3::new(x as f32, 0.0, 0.0)).unwrap();
    }
    assert_eq!(world.brick_count(), 5);

    world.clear_bricks();
    assert_eq!(world.brick_count(), 0);
    assert!(world.batch().is_empty());
}

#[test]
fn test_delete_unknown_id_returns_false() {
    let mut world = World::new();
    world.place_at(Vec3::ZERO).unwrap();
    assert!(!world.delete_brick(9999));
    assert_eq!(world.brick_count(), 1);
}

#[test]
fn test_delete_removes_brick_and_batch_slot() {
    let mut world = World::new();
    let id = world.place_at(Vec3::ZERO).unwrap();
    world.place_at(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(world.batch().len(), 2);

    assert!(world.delete_brick(id));
    assert_eq!(world.brick_count(), 1);
    assert_eq!(world.batch().len(), 1);
    // The surviving brick's slot is valid again after the rebuild
    let survivor = world.registry().iter().next().unwrap();
    assert_eq!(survivor.batch_slot, Some(0));
}

// ============================================================================
// Batch Mapping
// ============================================================================

#[test]
fn test_every_live_brick_has_exactly_one_slot() {
    let mut world = World::new();
    for x in 0..4 {
        world.place_at(Vec3::new(x as f32 * 2.0, 0.0, 0.0)).unwrap();
    }
    let mut slots: Vec<u32> = world
        .registry()
        .iter()
        .map(|b| b.batch_slot.expect("live brick without slot"))
        .collect();
    slots.sort_unstable();
    slots.dedup();
    assert_eq!(slots.len(), world.brick_count());
    assert_eq!(world.batch().len(), world.brick_count());
}

#[test]
fn test_rotated_brick_supported_by_column() {
    let mut world = World::new();
    // Unit column at x 1..2, z 0..1
    world.place_at(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    // 3x1 rotated to run along Z; its center pivot puts the footprint at
    // x 1..2, z -1..2, directly over the column
    world.tool.size_index = 2; // 3x1
    world.tool.rotation = Rotation::Deg90;
    let result = world.place_at(Vec3::new(0.0, 1.0, 0.0));
    assert!(result.is_ok(), "rotated brick should rest on the column");
}
