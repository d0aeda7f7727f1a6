//! 5x5 pixel grid used for the visual gas alert.
//!
//! The grid owns the whole cell buffer; the rest of the system only
//! asks for the cross pattern or a clear, never individual cells. The
//! physical strip snakes through the matrix, so even rows run
//! left-to-right and odd rows right-to-left.

/// Grid edge length in cells.
pub const GRID_SIDE: usize = 5;
/// Total cell count pushed per transmission.
pub const LED_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// One cell color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// Full-intensity alert red.
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
}

/// The 25-cell buffer in strip order, ready for transmission.
pub struct PixelGrid {
    cells: [Rgb; LED_COUNT],
}

impl PixelGrid {
    pub const fn new() -> Self {
        Self {
            cells: [Rgb::OFF; LED_COUNT],
        }
    }

    /// Turns every cell off.
    pub fn clear(&mut self) {
        self.cells = [Rgb::OFF; LED_COUNT];
    }

    /// Sets the cell at matrix coordinates; out-of-range coordinates
    /// are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < GRID_SIDE && y < GRID_SIDE {
            self.cells[Self::index(x, y)] = color;
        }
    }

    /// Draws the alert cross: full diagonal plus anti-diagonal.
    pub fn draw_cross(&mut self, color: Rgb) {
        for i in 0..GRID_SIDE {
            self.set(i, i, color);
            self.set(i, GRID_SIDE - 1 - i, color);
        }
    }

    /// Cells in strip order.
    pub fn cells(&self) -> &[Rgb; LED_COUNT] {
        &self.cells
    }

    /// Serpentine strip index for matrix coordinates.
    fn index(x: usize, y: usize) -> usize {
        if y % 2 == 0 {
            y * GRID_SIDE + x
        } else {
            y * GRID_SIDE + (GRID_SIDE - 1 - x)
        }
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serpentine_mapping() {
        // Even rows run left-to-right, odd rows are mirrored.
        assert_eq!(PixelGrid::index(0, 0), 0);
        assert_eq!(PixelGrid::index(4, 0), 4);
        assert_eq!(PixelGrid::index(0, 1), 9);
        assert_eq!(PixelGrid::index(4, 1), 5);
        assert_eq!(PixelGrid::index(2, 2), 12);
        assert_eq!(PixelGrid::index(0, 4), 20);
    }

    #[test]
    fn cross_lights_both_diagonals() {
        let mut grid = PixelGrid::new();
        grid.draw_cross(Rgb::RED);

        let lit = grid.cells().iter().filter(|c| **c != Rgb::OFF).count();
        // Two five-cell diagonals sharing the center.
        assert_eq!(lit, 9);

        for i in 0..GRID_SIDE {
            assert_eq!(grid.cells()[PixelGrid::index(i, i)], Rgb::RED);
            assert_eq!(
                grid.cells()[PixelGrid::index(i, GRID_SIDE - 1 - i)],
                Rgb::RED
            );
        }
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut grid = PixelGrid::new();
        grid.draw_cross(Rgb::RED);
        grid.clear();
        assert!(grid.cells().iter().all(|c| *c == Rgb::OFF));
    }

    #[test]
    fn out_of_range_set_is_ignored() {
        let mut grid = PixelGrid::new();
        grid.set(5, 0, Rgb::RED);
        grid.set(0, 5, Rgb::RED);
        assert!(grid.cells().iter().all(|c| *c == Rgb::OFF));
    }
}
