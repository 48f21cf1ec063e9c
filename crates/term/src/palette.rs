//! Level color palettes.
//!
//! Each level picks one of eight two-color palettes; a cell's color comes from
//! its pixel tag, so A and C share a color and B gets the other.

use crate::fb::Rgb;
use crate::types::Pixel;

pub const PALETTES: [[Rgb; 2]; 8] = [
    [Rgb::new(71, 134, 255), Rgb::new(244, 81, 93)],
    [Rgb::new(51, 141, 153), Rgb::new(76, 179, 115)],
    [Rgb::new(47, 115, 219), Rgb::new(90, 175, 216)],
    [Rgb::new(222, 117, 84), Rgb::new(221, 153, 85)],
    [Rgb::new(47, 115, 219), Rgb::new(140, 192, 148)],
    [Rgb::new(165, 90, 166), Rgb::new(90, 175, 216)],
    [Rgb::new(25, 169, 119), Rgb::new(195, 80, 81)],
    [Rgb::new(244, 81, 93), Rgb::new(245, 166, 35)],
];

pub const SUCCESS: Rgb = Rgb::new(77, 202, 131);
pub const DANGER: Rgb = Rgb::new(244, 81, 93);
pub const BACKGROUND: Rgb = Rgb::new(25, 34, 40);
pub const TEXT: Rgb = Rgb::new(255, 255, 255);
pub const TEXT_SECOND: Rgb = Rgb::new(124, 137, 171);
pub const GRID: Rgb = Rgb::new(48, 58, 66);

/// Palette for `level`, cycling every eight levels.
pub fn palette_for_level(level: u32) -> [Rgb; 2] {
    PALETTES[level as usize % PALETTES.len()]
}

/// Fill color for a tagged cell at `level`.
pub fn pixel_color(level: u32, pixel: Pixel) -> Rgb {
    palette_for_level(level)[(pixel.value() as usize - 1) % 2]
}
