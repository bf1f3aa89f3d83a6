use super::board_error::BoardError;
use super::grid::Grid;
use super::types::{CellLocation, Mark, PlayResult};
use super::win_detector::check_win;

/// Square tic-tac-toe board: owns the grid, validates placements and
/// reports wins and draws.
#[derive(Debug, Clone)]
pub struct GameBoard {
    grid: Grid,
    plays_made: usize,
    max_plays: usize,
}

impl GameBoard {
    pub const MIN_SIZE: usize = 2;
    pub const STANDARD_SIZE: usize = 3;

    pub fn new(size: usize) -> Result<Self, BoardError> {
        let max_plays = validate_size(size)?;
        Ok(Self {
            grid: Grid::new(size),
            plays_made: 0,
            max_plays,
        })
    }

    /// Replaces the grid with an empty `size` x `size` one and resets the
    /// play counter. On error the current board is kept as is.
    pub fn initialize(&mut self, size: usize) -> Result<(), BoardError> {
        let max_plays = validate_size(size)?;
        self.grid = Grid::new(size);
        self.plays_made = 0;
        self.max_plays = max_plays;
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.grid.size()
    }

    pub fn game_board(&self) -> &Grid {
        &self.grid
    }

    pub fn plays_made(&self) -> usize {
        self.plays_made
    }

    pub fn max_plays(&self) -> usize {
        self.max_plays
    }

    /// Places `mark` at `location` and reports whether that completed a line
    /// or filled the board.
    ///
    /// Fails without touching the board if `mark` is empty, `location` is
    /// outside the grid, or the cell is already taken (checked in that order).
    pub fn play_and_check(&mut self, mark: Mark, location: CellLocation) -> Result<PlayResult, BoardError> {
        if mark == Mark::Empty {
            return Err(BoardError::InvalidMark);
        }

        let size = self.board_size();
        let Some(current) = self.grid.get(location) else {
            return Err(BoardError::OutOfBounds { location, size });
        };

        if current != Mark::Empty {
            return Err(BoardError::CellOccupied { location, mark: current });
        }

        self.grid.set(location, mark);
        self.plays_made += 1;

        let result = check_win(&self.grid, location, mark);
        if !result.is_win() && self.plays_made == self.max_plays {
            return Ok(PlayResult::Draw);
        }

        Ok(result)
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self {
            grid: Grid::new(Self::STANDARD_SIZE),
            plays_made: 0,
            max_plays: Self::STANDARD_SIZE * Self::STANDARD_SIZE,
        }
    }
}

/// Returns the number of cells of a `size` x `size` board.
fn validate_size(size: usize) -> Result<usize, BoardError> {
    if size < GameBoard::MIN_SIZE {
        return Err(BoardError::InvalidSize { size, min: GameBoard::MIN_SIZE });
    }
    size.checked_mul(size).ok_or(BoardError::TooLarge { size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::Direction;

    fn at(row: usize, col: usize) -> CellLocation {
        CellLocation::new(row, col)
    }

    fn play_all(board: &mut GameBoard, moves: &[(Mark, usize, usize)]) -> PlayResult {
        let mut last = PlayResult::Continue;
        for &(mark, row, col) in moves {
            last = board.play_and_check(mark, at(row, col)).unwrap();
        }
        last
    }

    #[test]
    fn test_initialize_creates_empty_grid_for_any_valid_size() {
        for size in 2..=8 {
            let board = GameBoard::new(size).unwrap();
            assert_eq!(board.board_size(), size);
            assert_eq!(board.max_plays(), size * size);
            assert_eq!(board.plays_made(), 0);
            assert_eq!(board.game_board().empty_cells().count(), size * size);
        }
    }

    #[test]
    fn test_default_board_is_standard_size() {
        let board = GameBoard::default();
        assert_eq!(board.board_size(), 3);
        assert_eq!(board.max_plays(), 9);
    }

    #[test]
    fn test_new_rejects_small_sizes() {
        assert_eq!(GameBoard::new(0).unwrap_err(), BoardError::InvalidSize { size: 0, min: 2 });
        assert_eq!(GameBoard::new(1).unwrap_err(), BoardError::InvalidSize { size: 1, min: 2 });
    }

    #[test]
    fn test_size_whose_cell_count_overflows_is_rejected() {
        let size = usize::MAX / 2;
        assert_eq!(GameBoard::new(size).unwrap_err(), BoardError::TooLarge { size });

        let mut board = GameBoard::new(3).unwrap();
        board.play_and_check(Mark::O, at(0, 2)).unwrap();
        assert_eq!(board.initialize(size), Err(BoardError::TooLarge { size }));
        assert_eq!(board.board_size(), 3);
        assert_eq!(board.plays_made(), 1);
        assert_eq!(board.game_board().get(at(0, 2)), Some(Mark::O));
    }

    #[test]
    fn test_failed_initialize_keeps_previous_board() {
        let mut board = GameBoard::new(3).unwrap();
        board.play_and_check(Mark::X, at(1, 1)).unwrap();
        let before = board.game_board().clone();

        assert!(matches!(board.initialize(1), Err(BoardError::InvalidSize { .. })));
        assert_eq!(board.game_board(), &before);
        assert_eq!(board.plays_made(), 1);
        assert_eq!(board.board_size(), 3);
    }

    #[test]
    fn test_initialize_discards_previous_game() {
        let mut board = GameBoard::new(3).unwrap();
        board.play_and_check(Mark::X, at(0, 0)).unwrap();
        board.initialize(4).unwrap();
        assert_eq!(board.board_size(), 4);
        assert_eq!(board.plays_made(), 0);
        assert_eq!(board.max_plays(), 16);
        assert_eq!(board.game_board().get(at(0, 0)), Some(Mark::Empty));
    }

    #[test]
    fn test_empty_mark_is_rejected_everywhere() {
        let mut board = GameBoard::new(3).unwrap();
        for location in [at(0, 0), at(2, 2), at(7, 7)] {
            assert_eq!(board.play_and_check(Mark::Empty, location), Err(BoardError::InvalidMark));
        }
        assert_eq!(board.plays_made(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut board = GameBoard::new(3).unwrap();
        assert_eq!(
            board.play_and_check(Mark::X, at(3, 0)),
            Err(BoardError::OutOfBounds { location: at(3, 0), size: 3 })
        );
        assert_eq!(
            board.play_and_check(Mark::O, at(0, 3)),
            Err(BoardError::OutOfBounds { location: at(0, 3), size: 3 })
        );
        assert_eq!(board.plays_made(), 0);
    }

    #[test]
    fn test_occupied_cell_is_rejected_and_unchanged() {
        let mut board = GameBoard::new(3).unwrap();
        board.play_and_check(Mark::X, at(1, 1)).unwrap();

        assert_eq!(
            board.play_and_check(Mark::O, at(1, 1)),
            Err(BoardError::CellOccupied { location: at(1, 1), mark: Mark::X })
        );
        assert_eq!(board.game_board().get(at(1, 1)), Some(Mark::X));
        assert_eq!(board.plays_made(), 1);
    }

    #[test]
    fn test_failed_plays_leave_queries_untouched() {
        let mut board = GameBoard::new(3).unwrap();
        board.play_and_check(Mark::O, at(2, 0)).unwrap();
        let before = board.game_board().clone();

        let _ = board.play_and_check(Mark::Empty, at(0, 0));
        let _ = board.play_and_check(Mark::X, at(5, 5));
        let _ = board.play_and_check(Mark::X, at(2, 0));

        assert_eq!(board.game_board(), &before);
        assert_eq!(board.board_size(), 3);
        assert_eq!(board.plays_made(), 1);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = GameBoard::new(3).unwrap();
        let result = play_all(
            &mut board,
            &[(Mark::X, 0, 0), (Mark::O, 1, 0), (Mark::X, 0, 1), (Mark::O, 2, 2), (Mark::X, 0, 2)],
        );
        assert!(result.is_win());
        assert_eq!(result.win_direction(), Some(Direction::Horizontal));
        assert_eq!(result.win_location(), Some(at(0, 0)));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = GameBoard::new(3).unwrap();
        let result = play_all(
            &mut board,
            &[(Mark::X, 0, 0), (Mark::O, 1, 1), (Mark::X, 1, 0), (Mark::O, 2, 2), (Mark::X, 2, 0)],
        );
        assert!(result.is_win());
        assert_eq!(result.win_direction(), Some(Direction::Vertical));
        assert_eq!(result.win_location(), Some(at(0, 0)));
    }

    #[test]
    fn test_forward_diagonal_win() {
        let mut board = GameBoard::new(3).unwrap();
        let result = play_all(
            &mut board,
            &[(Mark::X, 0, 0), (Mark::O, 0, 1), (Mark::X, 1, 1), (Mark::O, 0, 2), (Mark::X, 2, 2)],
        );
        assert_eq!(result, PlayResult::Win { location: at(0, 0), direction: Direction::Diagonal });
    }

    #[test]
    fn test_backward_diagonal_win() {
        let mut board = GameBoard::new(3).unwrap();
        let result = play_all(
            &mut board,
            &[(Mark::X, 0, 2), (Mark::O, 0, 0), (Mark::X, 1, 1), (Mark::O, 0, 1), (Mark::X, 2, 0)],
        );
        assert_eq!(result, PlayResult::Win { location: at(0, 2), direction: Direction::Diagonal });
    }

    #[test]
    fn test_no_result_before_line_is_complete() {
        let mut board = GameBoard::new(3).unwrap();
        let result = play_all(&mut board, &[(Mark::X, 0, 0), (Mark::O, 1, 1), (Mark::X, 0, 1)]);
        assert_eq!(result, PlayResult::Continue);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let mut board = GameBoard::new(3).unwrap();
        let moves = [
            (Mark::X, 0, 0), (Mark::O, 0, 1), (Mark::X, 0, 2),
            (Mark::O, 1, 1), (Mark::X, 1, 0), (Mark::O, 1, 2),
            (Mark::X, 2, 1), (Mark::O, 2, 0),
        ];
        assert_eq!(play_all(&mut board, &moves), PlayResult::Continue);

        let last = board.play_and_check(Mark::X, at(2, 2)).unwrap();
        assert!(last.is_draw());
        assert!(!last.is_win());
        assert!(board.game_board().is_full());
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X
        // O O X
        // O X X  <- ninth move completes column 2
        let mut board = GameBoard::new(3).unwrap();
        let moves = [
            (Mark::X, 0, 0), (Mark::O, 0, 1), (Mark::X, 0, 2),
            (Mark::O, 1, 0), (Mark::X, 1, 2), (Mark::O, 1, 1),
            (Mark::X, 2, 1), (Mark::O, 2, 0),
        ];
        assert_eq!(play_all(&mut board, &moves), PlayResult::Continue);

        let last = board.play_and_check(Mark::X, at(2, 2)).unwrap();
        assert_eq!(board.plays_made(), board.max_plays());
        assert_eq!(last, PlayResult::Win { location: at(0, 2), direction: Direction::Vertical });
    }

    #[test]
    fn test_two_by_two_board() {
        let mut board = GameBoard::new(2).unwrap();
        board.play_and_check(Mark::O, at(0, 1)).unwrap();
        let result = board.play_and_check(Mark::O, at(1, 0)).unwrap();
        assert_eq!(result, PlayResult::Win { location: at(0, 1), direction: Direction::Diagonal });
    }
}
