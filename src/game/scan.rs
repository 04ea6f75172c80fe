use super::board::Cell;

/// Direction a run is read in, starting from its first cell.
///
/// Four headings are enough to see every line on the grid once: the
/// opposite directions (west, north, ...) are the same runs read from the
/// other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    South,
    Northeast,
    Southeast,
}

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::East,
        Heading::South,
        Heading::Northeast,
        Heading::Southeast,
    ];

    /// Whether a run of `count` cells starting at (`row`, `col`) stays on a
    /// `width` x `height` grid.
    fn fits(self, row: usize, col: usize, count: usize, width: usize, height: usize) -> bool {
        if row >= height || col >= width {
            return false;
        }
        let reach = count - 1;
        match self {
            Heading::East => ends_before(col, reach, width),
            Heading::South => ends_before(row, reach, height),
            Heading::Northeast => row >= reach && ends_before(col, reach, width),
            Heading::Southeast => ends_before(row, reach, height) && ends_before(col, reach, width),
        }
    }

    /// Position of the `i`-th cell of a run. Only valid once `fits` holds.
    fn offset(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Heading::East => (row, col + i),
            Heading::South => (row + i, col),
            Heading::Northeast => (row - i, col + i),
            Heading::Southeast => (row + i, col + i),
        }
    }
}

/// `start + reach < limit`, false on overflow.
fn ends_before(start: usize, reach: usize, limit: usize) -> bool {
    start.checked_add(reach).is_some_and(|end| end < limit)
}

/// Check whether `count` consecutive cells equal to `cell` start at
/// (`start_row`, `start_col`) and run along `heading`.
///
/// Row 0 is the top of the grid. Runs that would leave the grid are
/// rejected before any cell is read, so this never indexes out of bounds.
/// A `count` of zero is never a run.
pub fn in_a_row(
    cell: Cell,
    start_row: usize,
    start_col: usize,
    grid: &[Vec<Cell>],
    count: usize,
    heading: Heading,
) -> bool {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);

    if count == 0 || !heading.fits(start_row, start_col, count, width, height) {
        return false;
    }

    (0..count).all(|i| {
        let (row, col) = heading.offset(start_row, start_col, i);
        grid[row][col] == cell
    })
}
