use super::grid::Grid;
use super::types::{CellLocation, Direction, Mark, PlayResult};

/// Checks the lines through `location` for a completed line of `mark`.
///
/// Order: forward diagonal, backward diagonal, column, row. The first hit wins.
/// Each diagonal is only walked when `location` lies on it.
pub fn check_win(grid: &Grid, location: CellLocation, mark: Mark) -> PlayResult {
    let size = grid.size();

    if location.row == location.col && check_forward_diagonal(grid, mark) {
        return win_at(CellLocation::new(0, 0), Direction::Diagonal);
    }

    if location.row + location.col == size - 1 && check_backward_diagonal(grid, mark) {
        return win_at(CellLocation::new(0, size - 1), Direction::Diagonal);
    }

    if check_vertical(grid, location.col, mark) {
        return win_at(CellLocation::new(0, location.col), Direction::Vertical);
    }

    if check_horizontal(grid, location.row, mark) {
        return win_at(CellLocation::new(location.row, 0), Direction::Horizontal);
    }

    PlayResult::Continue
}

fn win_at(location: CellLocation, direction: Direction) -> PlayResult {
    PlayResult::Win { location, direction }
}

fn line_is(grid: &Grid, mut cells: impl Iterator<Item = CellLocation>, mark: Mark) -> bool {
    cells.all(|location| grid.get(location) == Some(mark))
}

fn check_forward_diagonal(grid: &Grid, mark: Mark) -> bool {
    let cells = (0..grid.size()).map(|i| CellLocation::new(i, i));
    line_is(grid, cells, mark)
}

fn check_backward_diagonal(grid: &Grid, mark: Mark) -> bool {
    let size = grid.size();
    let cells = (0..size).map(|i| CellLocation::new(i, size - 1 - i));
    line_is(grid, cells, mark)
}

fn check_vertical(grid: &Grid, col: usize, mark: Mark) -> bool {
    let cells = (0..grid.size()).map(|row| CellLocation::new(row, col));
    line_is(grid, cells, mark)
}

fn check_horizontal(grid: &Grid, row: usize, mark: Mark) -> bool {
    let cells = (0..grid.size()).map(|col| CellLocation::new(row, col));
    line_is(grid, cells, mark)
}
