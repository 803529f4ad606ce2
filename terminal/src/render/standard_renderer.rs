use super::traits::GameObjectRenderer;
use super::types::{CharDimensions, CharPattern};

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, is_head: bool) -> CharPattern {
        // Full block for the head, shaded block for the body, so the head
        // stays readable at any char dimensions.
        let ch = if is_head { '█' } else { '▓' };
        CharPattern::single(ch, self.char_dims)
    }

    fn render_food(&self) -> CharPattern {
        if self.char_dims.horizontal <= 2 && self.char_dims.vertical == 1 {
            CharPattern::single('●', self.char_dims)
        } else {
            // For larger blocks a solid fill of dots is noisy; thin it out
            // into a checkerboard.
            let mut pattern = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
            for (r, row) in pattern.iter_mut().enumerate() {
                for (c, cell) in row.iter_mut().enumerate() {
                    if (r + c) % 2 == 0 {
                        *cell = '●';
                    }
                }
            }
            CharPattern::new(pattern)
        }
    }

    fn render_empty(&self) -> CharPattern {
        CharPattern::empty(self.char_dims)
    }
}
