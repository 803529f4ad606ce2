use super::traits::GameObjectRenderer;
use super::types::CharGrid;
use engine::GameState;

pub struct BoardRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, game: &GameState) -> CharGrid {
        let mut grid = CharGrid::new(
            game.rows as usize,
            game.cols as usize,
            self.renderer.char_dimensions(),
        );

        if let Some(food) = game.food {
            let pattern = self.renderer.render_food();
            grid.set_cell(food.row as usize, food.col as usize, &pattern);
        }

        // Tail to head; the head is the last cell and gets its own glyph.
        let len = game.snake.len();
        for (i, cell) in game.snake.iter().enumerate() {
            let is_head = i + 1 == len;
            let pattern = self.renderer.render_snake_segment(is_head);
            grid.set_cell(cell.row as usize, cell.col as usize, &pattern);
        }

        grid
    }
}
