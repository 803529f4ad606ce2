use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row/column step one cell in this direction. Rows grow downward.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A grid cell. Signed so a prospective head one step past an edge is
/// representable before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub fn new(row: i16, col: i16) -> Self {
        Cell { row, col }
    }

    pub fn step(&self, direction: Direction) -> Cell {
        let (dr, dc) = direction.delta();
        Cell {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Ordered snake body, tail at the front of the deque and head at the back,
/// with an occupancy set kept in sync for O(1) collision checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        let occupied: HashSet<Cell> = body.iter().copied().collect();
        Snake { body, occupied }
    }

    pub fn head(&self) -> Cell {
        *self.body.back().expect("Snake body should not be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.front().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.occupied.contains(cell)
    }

    /// Tail-to-head iteration over the body cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Append a new head without shedding the tail (growth tick).
    pub fn grow(&mut self, new_head: Cell) {
        self.occupied.insert(new_head);
        self.body.push_back(new_head);
    }

    /// Append a new head and shed the oldest tail cell (normal movement).
    pub fn advance(&mut self, new_head: Cell) {
        self.grow(new_head);
        if let Some(old_tail) = self.body.pop_front() {
            self.occupied.remove(&old_tail);
        }
    }
}
