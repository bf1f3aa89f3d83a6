use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_player(&self) -> bool {
        *self != Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellLocation {
    pub row: usize,
    pub col: usize,
}

impl CellLocation {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts signed coordinates, as typed by a user, into a location.
    /// Returns `None` when either coordinate is negative.
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Some(Self { row, col })
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a single accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayResult {
    Continue,
    Draw,
    /// `location` anchors the line at its first cell in row 0 (diagonals,
    /// columns) or column 0 (rows).
    Win {
        location: CellLocation,
        direction: Direction,
    },
}

impl PlayResult {
    pub fn is_win(&self) -> bool {
        matches!(self, PlayResult::Win { .. })
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, PlayResult::Draw)
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, PlayResult::Continue)
    }

    pub fn win_location(&self) -> Option<CellLocation> {
        match self {
            PlayResult::Win { location, .. } => Some(*location),
            _ => None,
        }
    }

    pub fn win_direction(&self) -> Option<Direction> {
        match self {
            PlayResult::Win { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// Every cell on the winning line, ordered from the anchor outwards.
    /// Empty for non-winning results.
    pub fn winning_cells(&self, board_size: usize) -> Vec<CellLocation> {
        let PlayResult::Win { location, direction } = *self else {
            return Vec::new();
        };

        (0..board_size)
            .map(|i| match direction {
                Direction::Horizontal => CellLocation::new(location.row, i),
                Direction::Vertical => CellLocation::new(i, location.col),
                Direction::Diagonal if location.col == 0 => CellLocation::new(i, i),
                Direction::Diagonal => CellLocation::new(i, board_size - 1 - i),
            })
            .collect()
    }
}
