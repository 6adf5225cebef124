//! Brick Size Catalog
//!
//! The closed set of brick footprints the preview cycles through.
//! All catalog bricks are one unit tall; width and depth vary.

/// Dimensions of a catalog brick, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickSize {
    pub width_x: u32,
    pub height_y: u32,
    pub depth_z: u32,
}

impl BrickSize {
    pub const fn new(width_x: u32, depth_z: u32) -> Self {
        Self {
            width_x,
            height_y: 1,
            depth_z,
        }
    }

    /// True for footprints that look the same under a 90-degree turn.
    pub fn is_square(self) -> bool {
        self.width_x == self.depth_z
    }
}

/// Every placeable footprint, in cycling order (width x depth).
pub const BRICK_SIZES: [BrickSize; 9] = [
    BrickSize::new(1, 1),
    BrickSize::new(2, 1),
    BrickSize::new(3, 1),
    BrickSize::new(4, 2),
    BrickSize::new(6, 1),
    BrickSize::new(2, 2),
    BrickSize::new(2, 3),
    BrickSize::new(2, 4),
    BrickSize::new(2, 6),
];
