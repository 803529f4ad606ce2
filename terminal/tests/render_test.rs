use engine::{Cell, GameConfig, GameState};
use terminal::render::{
    board::BoardRenderer,
    standard_renderer::StandardRenderer,
    types::CharDimensions,
};

fn new_game(rows: u16, cols: u16) -> GameState {
    let config = GameConfig {
        rows,
        cols,
        ..GameConfig::default()
    };
    GameState::new(&config, 42).unwrap()
}

#[test]
fn test_2x1_rendering() {
    // 10x10 grid: snake centered on row 5 at columns 4..=6, head at (5,6).
    let mut game = new_game(10, 10);
    game.food = Some(Cell::new(7, 7));

    let renderer = StandardRenderer::new(CharDimensions::new(2, 1));
    let board_renderer = BoardRenderer::new(renderer);

    let char_grid = board_renderer.render(&game);
    let lines = char_grid.into_lines();

    // Verify dimensions
    assert_eq!(lines.len(), 10); // height remains same
    assert_eq!(lines[0].len(), 20); // width doubled (10 * 2)

    // Head at cell (5,6) -> chars 12,13 on row 5
    assert_eq!(lines[5][12], '█');
    assert_eq!(lines[5][13], '█');

    // Body at cells (5,4) and (5,5) -> chars 8..=11 on row 5
    assert_eq!(lines[5][8], '▓');
    assert_eq!(lines[5][9], '▓');
    assert_eq!(lines[5][10], '▓');
    assert_eq!(lines[5][11], '▓');

    // Food at cell (7,7) -> chars 14,15 on row 7
    assert_eq!(lines[7][14], '●');
    assert_eq!(lines[7][15], '●');
}

#[test]
fn test_1x1_rendering() {
    let mut game = new_game(10, 10);
    game.food = Some(Cell::new(7, 7));

    let renderer = StandardRenderer::new(CharDimensions::new(1, 1));
    let board_renderer = BoardRenderer::new(renderer);

    let lines = board_renderer.render(&game).into_lines();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0].len(), 10);

    assert_eq!(lines[5][6], '█');
    assert_eq!(lines[5][5], '▓');
    assert_eq!(lines[5][4], '▓');
    assert_eq!(lines[7][7], '●');

    // Everything else stays blank
    assert_eq!(lines[0][0], ' ');
    assert_eq!(lines[9][9], ' ');
}

#[test]
fn test_custom_dimensions() {
    // 5x5 grid with 3x2 character blocks.
    let mut game = new_game(5, 5);
    game.food = Some(Cell::new(0, 0));

    let renderer = StandardRenderer::new(CharDimensions::new(3, 2));
    let board_renderer = BoardRenderer::new(renderer);

    let lines = board_renderer.render(&game).into_lines();

    assert_eq!(lines.len(), 10); // 5 * 2
    assert_eq!(lines[0].len(), 15); // 5 * 3

    // Food at (0,0) renders as a checkerboard across its 3x2 block
    assert_eq!(lines[0][0], '●');
    assert_eq!(lines[0][1], ' ');
    assert_eq!(lines[0][2], '●');
    assert_eq!(lines[1][0], ' ');
    assert_eq!(lines[1][1], '●');
    assert_eq!(lines[1][2], ' ');

    // Head at cell (2,3) -> rows 4..=5, chars 9..=11, solid block
    for line in lines.iter().take(6).skip(4) {
        for ch in line.iter().take(12).skip(9) {
            assert_eq!(*ch, '█');
        }
    }
}

#[test]
fn test_missing_food_renders_nothing() {
    let mut game = new_game(10, 10);
    game.food = None;

    let renderer = StandardRenderer::new(CharDimensions::new(1, 1));
    let board_renderer = BoardRenderer::new(renderer);

    let lines = board_renderer.render(&game).into_lines();
    let dots = lines
        .iter()
        .flatten()
        .filter(|&&ch| ch == '●')
        .count();
    assert_eq!(dots, 0);
}
