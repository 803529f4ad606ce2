#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Two characters per cell reads roughly square in most terminal fonts.
    pub fn square_ish() -> Self {
        Self::new(2, 1)
    }
}

/// Character canvas for the board: one logical grid cell maps to a
/// `CharDimensions` block of characters.
pub struct CharGrid {
    grid: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(rows: usize, cols: usize, char_dims: CharDimensions) -> Self {
        let physical_width = cols * char_dims.horizontal;
        let physical_height = rows * char_dims.vertical;
        let grid = vec![vec![' '; physical_width]; physical_height];
        Self {
            grid,
            rows,
            cols,
            char_dims,
        }
    }

    pub fn set_cell(&mut self, row: usize, col: usize, pattern: &CharPattern) {
        let start_col = col * self.char_dims.horizontal;
        let start_row = row * self.char_dims.vertical;

        for (dr, pattern_row) in pattern.chars.iter().enumerate() {
            for (dc, &ch) in pattern_row.iter().enumerate() {
                if let Some(grid_row) = self.grid.get_mut(start_row + dr) {
                    if let Some(cell) = grid_row.get_mut(start_col + dc) {
                        *cell = ch;
                    }
                }
            }
        }
    }

    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.grid
    }

    pub fn physical_width(&self) -> usize {
        self.cols * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.rows * self.char_dims.vertical
    }
}

#[derive(Clone, Debug)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>) -> Self {
        Self { chars }
    }

    pub fn single(ch: char, dims: CharDimensions) -> Self {
        let chars = vec![vec![ch; dims.horizontal]; dims.vertical];
        Self { chars }
    }

    pub fn empty(dims: CharDimensions) -> Self {
        Self::single(' ', dims)
    }
}
