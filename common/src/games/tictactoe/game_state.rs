use crate::log;
use super::board::GameBoard;
use super::board_error::BoardError;
use super::types::{CellLocation, Mark, PlayResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Over,
}

/// Games won by each player across every game played in a `PlayArea`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub x: u32,
    pub o: u32,
}

impl Score {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }

    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }
}

/// Runs a sequence of games between X and O on a standard board: whose turn
/// it is, the result of the current game and the running score.
#[derive(Debug, Clone)]
pub struct PlayArea {
    board: GameBoard,
    current_player: Mark,
    result_message: String,
    state: GameState,
    score: Score,
}

impl PlayArea {
    pub fn new() -> Self {
        Self {
            board: GameBoard::default(),
            current_player: Mark::X,
            result_message: String::new(),
            state: GameState::InProgress,
            score: Score::default(),
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn result_message(&self) -> &str {
        &self.result_message
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Over
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Starts a fresh 3x3 game with X to move. The score carries over.
    pub fn new_game(&mut self) {
        if let Err(e) = self.board.initialize(GameBoard::STANDARD_SIZE) {
            log!("Failed to reset the board: {}", e);
            return;
        }
        self.current_player = Mark::X;
        self.result_message.clear();
        self.state = GameState::InProgress;
        log!("New game started, score X {} - O {}", self.score.x, self.score.o);
    }

    /// Plays the current player's mark at `location`.
    ///
    /// Returns `Ok(None)` without doing anything once the game is over.
    /// A move the board rejects is returned as the error and changes nothing.
    pub fn cell_selected(&mut self, location: CellLocation) -> Result<Option<PlayResult>, BoardError> {
        if self.state == GameState::Over {
            return Ok(None);
        }

        let player = self.current_player;
        let result = self.board.play_and_check(player, location).inspect_err(|e| {
            log!("Rejected move by {} at {}: {}", player, location, e);
        })?;

        match result {
            PlayResult::Win { direction, .. } => {
                self.result_message = format!("Player {} Wins", player);
                self.score.record_win(player);
                self.state = GameState::Over;
                log!("Player {} wins with a {:?} line", player, direction);
            }
            PlayResult::Draw => {
                self.result_message = "Draw".to_string();
                self.state = GameState::Over;
                log!("Game ended in a draw");
            }
            PlayResult::Continue => {
                if let Some(next) = player.opponent() {
                    self.current_player = next;
                }
            }
        }

        Ok(Some(result))
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new()
    }
}
