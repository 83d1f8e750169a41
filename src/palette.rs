use rand::Rng;

/// Display color assigned to a track when it spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// High-contrast colors for box overlays on video frames.
pub const PALETTE: [Color; 8] = [
    Color { r: 230, g: 25, b: 75 },  // red
    Color { r: 60, g: 180, b: 75 },  // green
    Color { r: 0, g: 130, b: 200 },  // blue
    Color { r: 255, g: 225, b: 25 }, // yellow
    Color { r: 245, g: 130, b: 48 }, // orange
    Color { r: 145, g: 30, b: 180 }, // purple
    Color { r: 70, g: 240, b: 240 }, // cyan
    Color { r: 240, g: 50, b: 230 }, // magenta
];

pub(crate) fn pick<R: Rng>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}
