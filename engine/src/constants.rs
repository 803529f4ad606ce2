/// Default tick interval in milliseconds for the game loop
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Default grid dimensions
pub const DEFAULT_GRID_ROWS: u16 = 20;
pub const DEFAULT_GRID_COLS: u16 = 20;

/// Smallest grid that can hold the three-segment starting snake
pub const MIN_GRID_DIMENSION: u16 = 3;

/// Largest grid dimension representable by signed cell coordinates
pub const MAX_GRID_DIMENSION: u16 = i16::MAX as u16;
