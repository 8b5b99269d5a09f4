//! In-memory results for the current session

use crate::core::ROWS;
use crate::game::round::RoundStatus;

/// Tally of finished rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub lost_by_rows: usize,
    pub lost_by_timeout: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins indexed by guesses used; index 0 is unused
    pub guess_distribution: [usize; ROWS + 1],
}

impl Statistics {
    /// Record a round that just became terminal
    pub fn record(&mut self, status: RoundStatus, guesses_used: usize) {
        match status {
            RoundStatus::InProgress => return,
            RoundStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(guesses_used) {
                    *slot += 1;
                }
            }
            RoundStatus::LostByRows => {
                self.lost_by_rows += 1;
                self.current_streak = 0;
            }
            RoundStatus::LostByTimeout => {
                self.lost_by_timeout += 1;
                self.current_streak = 0;
            }
        }
        self.total_games += 1;
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
