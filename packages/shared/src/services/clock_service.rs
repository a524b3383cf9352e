use chrono::{DateTime, Utc};

use crate::models::game::{Game, GameStatus, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockOutcome {
    Running,
    TimedOut,
}

#[derive(Clone)]
pub struct ClockService;

impl ClockService {
    pub fn new() -> Self {
        ClockService
    }

    /// Charges elapsed wall time to the side on move and stamps the game with
    /// `now`. The first move of a game costs no clock time, elapsed time is
    /// truncated to whole seconds, and clock skew never produces a negative
    /// deduction. A clock hitting zero ends the game on the spot: the side
    /// still holding time wins and no further deductions happen because
    /// terminal games reject moves.
    pub fn advance(&self, game: &mut Game, now: DateTime<Utc>) -> ClockOutcome {
        if let Some(last_move) = game.last_move_timestamp {
            let elapsed = now.signed_duration_since(last_move).num_seconds().max(0);
            game.update_clock(elapsed as u64);
        }
        game.last_move_timestamp = Some(now);

        if game.out_of_time() {
            game.status = GameStatus::Timeout;
            game.winner = if game.white_clock == 0 {
                Winner::Black
            } else {
                Winner::White
            };
            return ClockOutcome::TimedOut;
        }

        ClockOutcome::Running
    }
}
