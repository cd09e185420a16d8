pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const DEFAULT_THINKING_DELAY_MS: u64 = 500;
