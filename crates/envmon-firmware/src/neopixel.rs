//! WS2812 transmission for the 5x5 pixel grid.

use envmon_core::PixelGrid;
use smart_leds::{SmartLedsWrite, RGB8};

/// Pushes all 25 cells to the strip as one transmission. The grid is
/// always written whole; nothing else touches individual cells.
pub fn push<S>(strip: &mut S, grid: &PixelGrid)
where
    S: SmartLedsWrite<Color = RGB8>,
    S::Error: core::fmt::Debug,
{
    strip
        .write(grid.cells().iter().map(|c| RGB8::new(c.r, c.g, c.b)))
        .unwrap();
}
