//! Simple line-based game mode
//!
//! Text-based game without the TUI: one guess per line, colored feedback.

use crate::core::{ROWS, WORD_LENGTH, Word};
use crate::game::{Clock, GameEvent, GameSession};
use crate::output::{colored_row, print_round_over, print_statistics, print_turn_header};
use crate::wordlists::WordProvider;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple line-based mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or a new hidden word cannot be
/// picked for the next round.
pub fn run_simple<P: WordProvider, C: Clock>(session: &mut GameSession<P, C>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the simple mode reading lines from `input`
///
/// # Errors
///
/// See [`run_simple`].
pub fn run_simple_with<P, C, R>(session: &mut GameSession<P, C>, input: &mut R) -> Result<()>
where
    P: WordProvider,
    C: Clock,
    R: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Timer - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden {WORD_LENGTH}-letter word in {ROWS} tries before the clock runs out.");
    println!(
        "The clock is checked every time you press Enter. You have {}.",
        crate::output::formatters::format_clock(session.timer().budget_secs())
    );
    println!("Commands: 'quit' to exit\n");

    loop {
        session.tick();

        if session.status().is_terminal() {
            let history: Vec<_> = session.board().submitted_rows().collect();
            print_round_over(session.status(), session.target(), &history);
            print_statistics(session.statistics());

            let answer = read_line("\nPlay again? (yes/no)", input)?;
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    session.handle_event(GameEvent::RestartRequest)?;
                    println!("\n🔄 New round started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let timer = session.timer();
        print_turn_header(
            session.cursor().row,
            timer.remaining_secs(),
            timer.budget_secs(),
            timer.is_low(),
        );

        let Some(line) = read_line("Guess", input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        // Time spent waiting at the prompt counts
        if session.tick() {
            println!("{}", "⏰ Time ran out before that guess counted.".red());
            continue;
        }

        let word = match Word::new(&line) {
            Ok(word) => word,
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
                continue;
            }
        };

        let row_before = session.cursor().row;
        session.run_cycle(guess_events(&word))?;

        if session.cursor().row > row_before
            && let Some(outcome) = session.last_submit()
        {
            println!("  {}", colored_row(&word, &outcome.pattern));
        }
    }
}

fn guess_events(word: &Word) -> impl Iterator<Item = GameEvent> + '_ {
    word.text()
        .chars()
        .map(GameEvent::Letter)
        .chain(std::iter::once(GameEvent::Submit))
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ManualClock, RoundStatus, TIME_BUDGET_SECS};
    use crate::wordlists::ScriptedWordProvider;
    use std::io::{Cursor, Read};

    fn session(words: &[&str]) -> GameSession<ScriptedWordProvider, ManualClock> {
        GameSession::new(
            ScriptedWordProvider::new(words.iter().copied()),
            ManualClock::new(),
        )
        .unwrap()
    }

    #[test]
    fn plays_a_winning_round_then_quits() {
        let mut s = session(&["crane"]);
        let mut input = Cursor::new("slate\ncrane\nno\n");
        run_simple_with(&mut s, &mut input).unwrap();

        assert_eq!(s.status(), RoundStatus::Won);
        assert_eq!(s.cursor().row, 2);
        assert_eq!(s.statistics().games_won, 1);
    }

    #[test]
    fn invalid_lines_are_not_guesses() {
        let mut s = session(&["crane"]);
        let mut input = Cursor::new("abc\nsl4te\nquit\n");
        run_simple_with(&mut s, &mut input).unwrap();

        assert_eq!(s.status(), RoundStatus::InProgress);
        assert_eq!(s.cursor(), crate::game::Cursor::default());
    }

    #[test]
    fn play_again_starts_next_round() {
        let mut s = session(&["crane", "pilot"]);
        let mut input = Cursor::new("crane\nyes\npilot\nn\n");
        run_simple_with(&mut s, &mut input).unwrap();

        assert_eq!(s.target().text(), "PILOT");
        assert_eq!(s.statistics().games_won, 2);
    }

    /// Reader that moves the clock forward each time a line is taken
    struct SlowReader {
        inner: Cursor<&'static str>,
        clock: ManualClock,
        delay_secs: u64,
    }

    impl Read for SlowReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl BufRead for SlowReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt);
        }

        fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
            self.clock.advance_secs(self.delay_secs);
            self.inner.read_line(buf)
        }
    }

    #[test]
    fn guess_entered_after_expiry_does_not_count() {
        let clock = ManualClock::new();
        let mut s =
            GameSession::new(ScriptedWordProvider::new(["crane"]), clock.clone()).unwrap();
        let mut input = SlowReader {
            inner: Cursor::new("crane\nno\n"),
            clock,
            delay_secs: TIME_BUDGET_SECS + 600,
        };
        run_simple_with(&mut s, &mut input).unwrap();

        assert_eq!(s.status(), RoundStatus::LostByTimeout);
        assert_eq!(s.cursor().row, 0);
        assert_eq!(s.statistics().lost_by_timeout, 1);
        assert_eq!(s.statistics().games_won, 0);
    }

    #[test]
    fn guess_within_budget_still_counts() {
        let clock = ManualClock::new();
        let mut s =
            GameSession::new(ScriptedWordProvider::new(["crane"]), clock.clone()).unwrap();
        let mut input = SlowReader {
            inner: Cursor::new("crane\nno\n"),
            clock,
            delay_secs: TIME_BUDGET_SECS - 1,
        };
        run_simple_with(&mut s, &mut input).unwrap();

        assert_eq!(s.status(), RoundStatus::Won);
    }

    #[test]
    fn end_of_input_quits() {
        let mut s = session(&["crane"]);
        let mut input = Cursor::new("slate\n");
        run_simple_with(&mut s, &mut input).unwrap();
        assert_eq!(s.cursor().row, 1);
    }
}
