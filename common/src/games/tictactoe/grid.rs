use super::types::{CellLocation, Mark};

/// Square grid of marks stored row by row.
///
/// Read access is public; only the board engine writes cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Mark>,
    size: usize,
}

impl Grid {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            cells: vec![Mark::Empty; size * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, location: CellLocation) -> bool {
        location.row < self.size && location.col < self.size
    }

    pub fn get(&self, location: CellLocation) -> Option<Mark> {
        if !self.contains(location) {
            return None;
        }
        self.cells.get(self.index(location)).copied()
    }

    pub(crate) fn set(&mut self, location: CellLocation, mark: Mark) {
        let index = self.index(location);
        self.cells[index] = mark;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellLocation> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(i, _)| CellLocation::new(i / self.size, i % self.size))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| mark.is_player())
    }

    fn index(&self, location: CellLocation) -> usize {
        location.row * self.size + location.col
    }
}
