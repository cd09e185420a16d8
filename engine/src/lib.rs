pub mod board;
pub mod bot;
pub mod config;
pub mod error;
pub mod logger;
pub mod session;
mod defaults;
mod session_rng;
mod types;

pub use board::{Board, WIN_LINES};
pub use bot::select_move;
pub use error::{ConfigError, EngineError, MoveError};
pub use session::{GameSession, SessionSettings};
pub use session_rng::SessionRng;
pub use types::{Cell, Difficulty, GameMode, GameStatus, Mark};
