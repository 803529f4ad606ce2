use anyhow::{ensure, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::util::PseudoRandom;
use crate::{Cell, Direction, Snake};
use crate::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_TICK_INTERVAL_MS, MAX_GRID_DIMENSION,
    MIN_GRID_DIMENSION,
};

const DEFAULT_SNAKE_LENGTH: usize = 3;

/// Construction-time options. Validated once in [`GameState::new`];
/// the simulation itself never re-checks them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

// Serializable state for snapshots
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    pub rows: u16,
    pub cols: u16,
    pub snake: Snake,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    pub running: bool,
    pub paused: bool,
    pub tick: u32,

    rng: PseudoRandom,
}

impl GameState {
    /// Builds a game in its canonical starting position. The seed fixes the
    /// food-placement stream, so a given seed replays identically.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self> {
        ensure!(
            config.rows >= MIN_GRID_DIMENSION && config.cols >= MIN_GRID_DIMENSION,
            "grid must be at least {}x{}, got {}x{}",
            MIN_GRID_DIMENSION,
            MIN_GRID_DIMENSION,
            config.rows,
            config.cols
        );
        // Cell coordinates are i16; anything wider would wrap the bounds check.
        ensure!(
            config.rows <= MAX_GRID_DIMENSION && config.cols <= MAX_GRID_DIMENSION,
            "grid must be at most {}x{}, got {}x{}",
            MAX_GRID_DIMENSION,
            MAX_GRID_DIMENSION,
            config.rows,
            config.cols
        );
        ensure!(
            config.tick_interval_ms > 0,
            "tick interval must be positive"
        );

        let mut state = GameState {
            rows: config.rows,
            cols: config.cols,
            snake: starting_snake(config.rows, config.cols),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            running: true,
            paused: false,
            tick: 0,
            rng: PseudoRandom::new(seed),
        };
        state.spawn_food();
        Ok(state)
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    /// Reinitializes everything except the RNG stream back to the
    /// canonical start.
    pub fn reset(&mut self) {
        debug!("resetting game after {} ticks, score {}", self.tick, self.score);
        self.snake = starting_snake(self.rows, self.cols);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.food = None;
        self.score = 0;
        self.running = true;
        self.paused = false;
        self.tick = 0;
        self.spawn_food();
    }

    /// Buffers a direction request for the next tick. Reversing into the
    /// neck is ignored: the request is compared against the committed
    /// direction, not the pending one, so rapid re-buffering before a tick
    /// can never fold the snake onto its second segment.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.running {
            return;
        }
        if requested == self.direction.opposite() {
            return;
        }
        self.pending_direction = requested;
    }

    /// Flips pause while the game is running; a finished game stays as-is.
    pub fn toggle_pause(&mut self) {
        if !self.running {
            return;
        }
        self.paused = !self.paused;
    }

    /// Advances the simulation one step. No-op while paused or after game
    /// over; the driver may keep calling it unconditionally.
    pub fn tick(&mut self) {
        if !self.running || self.paused {
            return;
        }

        self.direction = self.pending_direction;
        let new_head = self.snake.head().step(self.direction);

        if !self.in_bounds(&new_head) || self.snake.contains(&new_head) {
            debug!(
                "snake died at tick {} moving {:?} into {:?}",
                self.tick, self.direction, new_head
            );
            self.running = false;
            return;
        }

        if self.food == Some(new_head) {
            self.snake.grow(new_head);
            self.score += 1;
            self.spawn_food();
        } else {
            self.snake.advance(new_head);
        }

        self.tick += 1;
    }

    fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.row < self.rows as i16
            && cell.col >= 0
            && cell.col < self.cols as i16
    }

    /// Places food uniformly at random on an unoccupied cell. When the snake
    /// covers the whole grid there is nowhere left to place it; the game
    /// keeps running with no food rather than declaring a terminal state.
    fn spawn_food(&mut self) {
        let free: Vec<Cell> = (0..self.rows as i16)
            .flat_map(|row| (0..self.cols as i16).map(move |col| Cell::new(row, col)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();

        if free.is_empty() {
            info!("grid fully occupied at tick {}, no food to spawn", self.tick);
            self.food = None;
        } else {
            self.food = Some(free[self.rng.next_index(free.len())]);
        }
    }
}

/// Three horizontally adjacent cells centered on the grid, head to the right.
fn starting_snake(rows: u16, cols: u16) -> Snake {
    let row = (rows / 2) as i16;
    let col = (cols / 2) as i16;
    let half = (DEFAULT_SNAKE_LENGTH / 2) as i16;
    Snake::from_cells((-half..=half).map(|dc| Cell::new(row, col + dc)))
}
