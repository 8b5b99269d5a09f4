//! Game session: round + timer + word source
//!
//! The session is the single owner of all mutable game state. Front-ends feed
//! it [`GameEvent`]s and read back the board, clock and status once per cycle.

use crate::core::Word;
use crate::game::board::{Board, Cursor};
use crate::game::round::{Round, RoundStatus, SubmitOutcome};
use crate::game::stats::Statistics;
use crate::game::timer::{Clock, TIME_BUDGET_SECS, Timer, TimerEvent};
use crate::wordlists::{ProviderError, WordProvider};
use tracing::{info, warn};

/// Discrete input delivered by a front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Letter(char),
    Backspace,
    Submit,
    RestartRequest,
    Quit,
}

/// A running game
pub struct GameSession<P, C> {
    round: Round,
    timer: Timer,
    provider: P,
    clock: C,
    stats: Statistics,
    last_submit: Option<SubmitOutcome>,
    should_quit: bool,
}

impl<P: WordProvider, C: Clock> GameSession<P, C> {
    /// Start the first round with the default time budget
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the provider cannot produce a first word.
    pub fn new(provider: P, clock: C) -> Result<Self, ProviderError> {
        Self::with_budget(provider, clock, TIME_BUDGET_SECS)
    }

    /// Start the first round with a custom time budget
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the provider cannot produce a first word.
    pub fn with_budget(mut provider: P, clock: C, budget_secs: u64) -> Result<Self, ProviderError> {
        let target = provider.pick_word()?;
        let timer = Timer::new(budget_secs, clock.now_millis());

        Ok(Self {
            round: Round::new(target),
            timer,
            provider,
            clock,
            stats: Statistics::default(),
            last_submit: None,
            should_quit: false,
        })
    }

    /// Apply one input event
    ///
    /// Events that make no sense in the current state are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if a restart cannot obtain a new word. The
    /// finished round is left untouched in that case.
    pub fn handle_event(&mut self, event: GameEvent) -> Result<(), ProviderError> {
        match event {
            GameEvent::Letter(ch) => {
                self.round.type_letter(ch);
            }
            GameEvent::Backspace => {
                self.round.backspace();
            }
            GameEvent::Submit => {
                if let Some(outcome) = self.round.submit() {
                    self.last_submit = Some(outcome);
                    if outcome.status.is_terminal() {
                        self.end_round();
                    }
                }
            }
            GameEvent::RestartRequest => self.restart()?,
            GameEvent::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Sample the clock and apply a timeout if the countdown just ran out
    ///
    /// Returns `true` when this tick ended the round.
    pub fn tick(&mut self) -> bool {
        let Some(TimerEvent::Expired) = self.timer.tick(self.clock.now_millis()) else {
            return false;
        };

        info!("timer expired");
        if self.round.timeout() {
            self.stats.record(self.round.status(), self.round.guesses_used());
            true
        } else {
            false
        }
    }

    /// One loop cycle: all queued input in arrival order, then the clock
    ///
    /// Input goes first so a win or last-row loss in this cycle can never be
    /// overwritten by a timeout.
    ///
    /// # Errors
    ///
    /// Returns the first `ProviderError` raised by a restart. Events after it
    /// are not applied.
    pub fn run_cycle<I>(&mut self, events: I) -> Result<(), ProviderError>
    where
        I: IntoIterator<Item = GameEvent>,
    {
        for event in events {
            self.handle_event(event)?;
        }
        self.tick();
        Ok(())
    }

    fn restart(&mut self) -> Result<(), ProviderError> {
        if !self.round.status().is_terminal() {
            return Ok(());
        }

        let target = self.provider.pick_word().inspect_err(|err| {
            warn!(%err, "could not pick a new word");
        })?;
        self.round.reset(target);
        self.timer.reset(self.clock.now_millis());
        self.last_submit = None;
        info!("round restarted");
        Ok(())
    }

    fn end_round(&mut self) {
        self.timer.deactivate();
        self.stats.record(self.round.status(), self.round.guesses_used());
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        self.round.board()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.round.cursor()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.round.status()
    }

    /// Hidden word; front-ends should only reveal it once the round is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        self.round.target()
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs()
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Most recent accepted submission in this round
    #[must_use]
    pub const fn last_submit(&self) -> Option<SubmitOutcome> {
        self.last_submit
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, ROWS};
    use crate::game::timer::ManualClock;
    use crate::wordlists::ScriptedWordProvider;

    fn session(words: &[&str]) -> (GameSession<ScriptedWordProvider, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let provider = ScriptedWordProvider::new(words.iter().copied());
        let session = GameSession::new(provider, clock.clone()).unwrap();
        (session, clock)
    }

    fn guess_events(word: &str) -> Vec<GameEvent> {
        word.chars()
            .map(GameEvent::Letter)
            .chain([GameEvent::Submit])
            .collect()
    }

    #[test]
    fn new_session_is_ready() {
        let (s, _) = session(&["crane"]);
        assert_eq!(s.status(), RoundStatus::InProgress);
        assert_eq!(s.remaining_secs(), TIME_BUDGET_SECS);
        assert!(s.timer().is_active());
        assert_eq!(s.target().text(), "CRANE");
    }

    #[test]
    fn startup_fails_without_words() {
        let provider = ScriptedWordProvider::new(Vec::<String>::new());
        let result = GameSession::new(provider, ManualClock::new());
        assert!(matches!(result, Err(ProviderError::EmptyWordList)));
    }

    #[test]
    fn startup_fails_on_malformed_word() {
        let provider = ScriptedWordProvider::new(["cr4ne"]);
        let result = GameSession::new(provider, ManualClock::new());
        assert!(matches!(result, Err(ProviderError::Malformed { .. })));
    }

    #[test]
    fn winning_stops_the_clock() {
        let (mut s, clock) = session(&["crane"]);
        clock.advance_secs(10);
        s.run_cycle(guess_events("crane")).unwrap();

        assert_eq!(s.status(), RoundStatus::Won);
        assert!(!s.timer().is_active());
        assert_eq!(s.remaining_secs(), TIME_BUDGET_SECS);
        assert_eq!(s.statistics().games_won, 1);
        assert_eq!(s.statistics().guess_distribution[1], 1);
    }

    #[test]
    fn timeout_ends_round() {
        let (mut s, clock) = session(&["crane"]);
        s.run_cycle(guess_events("slate")).unwrap();
        clock.advance_secs(TIME_BUDGET_SECS);

        assert!(s.tick());
        assert_eq!(s.status(), RoundStatus::LostByTimeout);
        assert_eq!(s.remaining_secs(), 0);
        assert_eq!(s.statistics().lost_by_timeout, 1);

        // Typing after the timeout changes nothing
        s.run_cycle(guess_events("crane")).unwrap();
        assert_eq!(s.status(), RoundStatus::LostByTimeout);
        assert_eq!(s.cursor().row, 1);
    }

    #[test]
    fn win_in_same_cycle_as_expiry_stays_won() {
        let (mut s, clock) = session(&["crane"]);
        clock.advance_secs(TIME_BUDGET_SECS + 5);
        s.run_cycle(guess_events("crane")).unwrap();

        assert_eq!(s.status(), RoundStatus::Won);
        assert_eq!(s.statistics().total_games, 1);
        assert_eq!(s.statistics().lost_by_timeout, 0);
    }

    #[test]
    fn last_row_loss_in_same_cycle_as_expiry() {
        let (mut s, clock) = session(&["crane"]);
        for _ in 0..ROWS - 1 {
            s.run_cycle(guess_events("slate")).unwrap();
        }
        clock.advance_secs(TIME_BUDGET_SECS);
        s.run_cycle(guess_events("slate")).unwrap();

        assert_eq!(s.status(), RoundStatus::LostByRows);
        assert_eq!(s.statistics().total_games, 1);
    }

    #[test]
    fn timeout_fires_once_per_round() {
        let (mut s, clock) = session(&["crane"]);
        clock.advance_secs(TIME_BUDGET_SECS);
        assert!(s.tick());
        for _ in 0..10 {
            clock.advance_secs(1);
            assert!(!s.tick());
        }
        assert_eq!(s.statistics().total_games, 1);
    }

    #[test]
    fn restart_ignored_while_in_progress() {
        let (mut s, _) = session(&["crane", "slate"]);
        s.run_cycle([GameEvent::Letter('a'), GameEvent::RestartRequest])
            .unwrap();
        assert_eq!(s.target().text(), "CRANE");
        assert_eq!(s.cursor().col, 1);
    }

    #[test]
    fn restart_after_loss_resets_everything() {
        let (mut s, clock) = session(&["crane", "pilot"]);
        s.run_cycle(guess_events("slate")).unwrap();
        clock.advance_secs(TIME_BUDGET_SECS);
        s.tick();

        s.run_cycle([GameEvent::RestartRequest]).unwrap();

        assert_eq!(s.status(), RoundStatus::InProgress);
        assert_eq!(s.target().text(), "PILOT");
        assert_eq!(s.cursor(), Cursor::default());
        assert!(
            s.board()
                .rows()
                .iter()
                .flatten()
                .all(|cell| cell.feedback == Feedback::Empty && cell.letter.is_none())
        );
        assert_eq!(s.remaining_secs(), TIME_BUDGET_SECS);
        assert!(s.timer().is_active());
        assert_eq!(s.last_submit(), None);
    }

    #[test]
    fn restarted_round_can_time_out_again() {
        let (mut s, clock) = session(&["crane"]);
        clock.advance_secs(TIME_BUDGET_SECS);
        s.tick();
        s.handle_event(GameEvent::RestartRequest).unwrap();

        clock.advance_secs(TIME_BUDGET_SECS - 1);
        assert!(!s.tick());
        assert_eq!(s.remaining_secs(), 1);
        clock.advance_secs(1);
        assert!(s.tick());
        assert_eq!(s.statistics().lost_by_timeout, 2);
    }

    #[test]
    fn failed_restart_keeps_finished_round() {
        let (mut s, _) = session(&["crane", "bad"]);
        s.run_cycle(guess_events("crane")).unwrap();

        let err = s.handle_event(GameEvent::RestartRequest).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { .. }));
        assert_eq!(s.status(), RoundStatus::Won);
        assert_eq!(s.target().text(), "CRANE");
    }

    #[test]
    fn backspace_and_last_submit() {
        let (mut s, _) = session(&["crane"]);
        s.run_cycle(
            "slatx"
                .chars()
                .map(GameEvent::Letter)
                .chain([GameEvent::Backspace, GameEvent::Letter('e'), GameEvent::Submit]),
        )
        .unwrap();

        let outcome = s.last_submit().unwrap();
        assert_eq!(outcome.pattern.to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(outcome.status, RoundStatus::InProgress);
    }

    #[test]
    fn quit_sets_flag() {
        let (mut s, _) = session(&["crane"]);
        assert!(!s.should_quit());
        s.handle_event(GameEvent::Quit).unwrap();
        assert!(s.should_quit());
    }
}
