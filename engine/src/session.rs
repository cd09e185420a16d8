use crate::board::Board;
use crate::bot::select_move;
use crate::error::{EngineError, MoveError};
use crate::log;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, GameMode, GameStatus, Mark};

/// Choices fixed for the lifetime of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    mode: GameMode,
    difficulty: Option<Difficulty>,
}

impl SessionSettings {
    pub fn player_vs_player() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            difficulty: None,
        }
    }

    pub fn player_vs_computer(difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            difficulty: Some(difficulty),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

/// Complete state of one game. Every transition returns a new session;
/// a rejected move leaves the caller holding the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_mark: Mark,
    settings: SessionSettings,
}

impl GameSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            board: Board::empty(),
            current_mark: Mark::X,
            settings,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn computer_mark(&self) -> Option<Mark> {
        match self.settings.mode {
            GameMode::PlayerVsComputer => Some(Mark::O),
            GameMode::PlayerVsPlayer => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_active(&self) -> bool {
        !self.status().is_terminal()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.computer_mark() == Some(self.current_mark)
    }

    pub fn play(&self, index: usize) -> Result<GameSession, MoveError> {
        let board = self.board.apply_move(index, self.current_mark)?;
        log!("{} played cell {}", self.current_mark, index);
        Ok(self.advance(board))
    }

    /// Lets the computer pick and place a mark for the side to move.
    ///
    /// Fails with `NoDifficulty` when the session has no difficulty,
    /// which is always the case in player-vs-player mode.
    pub fn play_computer(&self, rng: &mut SessionRng) -> Result<(GameSession, usize), EngineError> {
        if !self.is_active() {
            return Err(MoveError::GameTerminal.into());
        }

        let difficulty = self.settings.difficulty.ok_or(EngineError::NoDifficulty)?;
        let index = select_move(&self.board, difficulty, self.current_mark, rng)?;
        let board = self.board.apply_move(index, self.current_mark)?;
        Ok((self.advance(board), index))
    }

    pub fn restart(&self) -> GameSession {
        log!("Restarting game");
        GameSession::new(self.settings)
    }

    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(mark) => format!("{} wins!", mark),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => {
                let mode = self.settings.mode.as_str().to_uppercase();
                match self.settings.difficulty {
                    Some(difficulty) => format!(
                        "{}'s Turn ({}, {})",
                        self.current_mark,
                        mode,
                        difficulty.as_str().to_uppercase()
                    ),
                    None => format!("{}'s Turn ({})", self.current_mark, mode),
                }
            }
        }
    }

    fn advance(&self, board: Board) -> GameSession {
        let status = board.status();
        let current_mark = if status.is_terminal() {
            self.current_mark
        } else {
            self.current_mark.opponent()
        };

        match status {
            GameStatus::Won(mark) => log!("{} wins", mark),
            GameStatus::Draw => log!("Game drawn"),
            GameStatus::InProgress => {}
        }

        GameSession {
            board,
            current_mark,
            settings: self.settings,
        }
    }
}
