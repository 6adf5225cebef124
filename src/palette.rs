//! Brick Color Palette
//!
//! The closed set of permitted brick colors. Raw RGB tuples are only
//! accepted through [`BrickColor::from_rgb`], which rejects anything that
//! is not a palette entry; this guards the import path against arbitrary
//! color data.

/// Divisor applied to each channel to derive the emissive variant.
pub const EMISS_DARKEN: f32 = 3.0;

/// Tolerance when matching raw RGB values against the palette. Loaded
/// records round-trip through JSON (sometimes as strings), so exact float
/// equality is too strict.
const MATCH_EPSILON: f32 = 1e-3;

/// A named palette color. The only valid color inputs for a brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Default,
}

impl BrickColor {
    /// Every palette entry.
    pub const ALL: [BrickColor; 7] = [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Green,
        BrickColor::Blue,
        BrickColor::Purple,
        BrickColor::Default,
    ];

    /// The colors the preview brick cycles through. Default is the spawn
    /// color only and is not part of the cycle.
    pub const CYCLE: [BrickColor; 6] = [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Green,
        BrickColor::Blue,
        BrickColor::Purple,
    ];

    /// Diffuse RGB channels, 0.0 to 1.0.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            BrickColor::Red => [1.0, 0.0, 0.0],
            BrickColor::Orange => [1.0, 0.5, 1.0],
            BrickColor::Yellow => [1.0, 1.0, 0.0],
            BrickColor::Green => [0.0, 1.0, 0.0],
            BrickColor::Blue => [0.0, 0.0, 1.0],
            BrickColor::Purple => [1.0, 0.0, 1.0],
            BrickColor::Default => [0.0, 0.58, 0.86],
        }
    }

    /// Emissive variant: each channel darkened by [`EMISS_DARKEN`].
    pub fn emissive(self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [r / EMISS_DARKEN, g / EMISS_DARKEN, b / EMISS_DARKEN]
    }

    /// Match a raw RGB tuple back to a palette entry. `None` for anything
    /// outside the palette.
    pub fn from_rgb(rgb: [f32; 3]) -> Option<BrickColor> {
        Self::ALL.into_iter().find(|color| {
            let c = color.rgb();
            (c[0] - rgb[0]).abs() < MATCH_EPSILON
                && (c[1] - rgb[1]).abs() < MATCH_EPSILON
                && (c[2] - rgb[2]).abs() < MATCH_EPSILON
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            BrickColor::Red => "red",
            BrickColor::Orange => "orange",
            BrickColor::Yellow => "yellow",
            BrickColor::Green => "green",
            BrickColor::Blue => "blue",
            BrickColor::Purple => "purple",
            BrickColor::Default => "default",
        }
    }
}

impl Default for BrickColor {
    fn default() -> Self {
        BrickColor::Default
    }
}
