use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::info;

use crate::render::board::BoardRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::CharDimensions;
use engine::{Direction, GameConfig, GameState};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
}

pub struct App {
    pub game: GameState,
    board_renderer: BoardRenderer<StandardRenderer>,
    tick_interval: Duration,
    last_tick: Instant,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let game = GameState::new(&config, seed)?;
        let renderer = StandardRenderer::new(CharDimensions::square_ish());
        Ok(Self {
            game,
            board_renderer: BoardRenderer::new(renderer),
            tick_interval,
            last_tick: Instant::now(),
        })
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Up => self.game.set_direction(Direction::Up),
            KeyCode::Down => self.game.set_direction(Direction::Down),
            KeyCode::Left => self.game.set_direction(Direction::Left),
            KeyCode::Right => self.game.set_direction(Direction::Right),
            KeyCode::Char(' ') => self.game.toggle_pause(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.game.reset(),
            KeyCode::Char('q') | KeyCode::Esc => return Some(AppCommand::Quit),
            _ => {}
        }
        None
    }

    /// Runs at most one engine tick per call, once the tick interval has
    /// elapsed. The engine itself ignores ticks while paused or finished.
    pub fn update(&mut self, now: Instant) {
        if now.duration_since(self.last_tick) < self.tick_interval {
            return;
        }
        self.last_tick = now;

        let was_running = self.game.running;
        self.game.tick();
        if was_running && !self.game.running {
            info!(
                score = self.game.score,
                ticks = self.game.current_tick(),
                "game over"
            );
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let board = self.board_renderer.render(&self.game);

        // +2 on each axis for the border.
        let board_area = Rect {
            x: area.x,
            y: area.y,
            width: (board.physical_width() as u16 + 2).min(area.width),
            height: (board.physical_height() as u16 + 2).min(area.height),
        };

        let lines: Vec<Line> = board
            .into_lines()
            .into_iter()
            .map(|row| Line::from(row.into_iter().collect::<String>()))
            .collect();
        let board_widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Snake "));
        frame.render_widget(board_widget, board_area);

        let score_y = board_area.y + board_area.height;
        if score_y < area.y + area.height {
            let score_area = Rect {
                x: area.x,
                y: score_y,
                width: area.width,
                height: 1,
            };
            let status = format!(
                "Score: {}   arrows: move  space: pause  r: restart  q: quit",
                self.game.score
            );
            frame.render_widget(Paragraph::new(status), score_area);
        }

        if self.game.paused || !self.game.running {
            let text = if !self.game.running {
                "Game Over - press R to restart"
            } else {
                "Paused"
            };
            self.render_overlay(frame, board_area, text);
        }
    }

    fn render_overlay(&self, frame: &mut Frame, board_area: Rect, text: &str) {
        let width = (text.len() as u16 + 4).min(board_area.width);
        let height = 3u16.min(board_area.height);
        let overlay = Rect {
            x: board_area.x + (board_area.width - width) / 2,
            y: board_area.y + (board_area.height - height) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, overlay);
        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, overlay);
    }
}
