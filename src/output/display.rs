//! Display functions for command results

use super::formatters::{format_clock, time_bar};
use crate::commands::CheckResult;
use crate::core::{Feedback, Pattern, ROWS, Word};
use crate::game::{RoundStatus, Statistics};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
        Feedback::Empty => text.normal(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_row(word: &Word, pattern: &Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.feedback())
        .map(|(ch, &fb)| tile(ch, fb).to_string())
        .collect()
}

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.pattern));
    println!("  {}", result.pattern.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        result.pattern.count(Feedback::Correct).to_string().green(),
        result.pattern.count(Feedback::Present).to_string().yellow(),
        result.pattern.count(Feedback::Absent).to_string().bright_black()
    );

    if result.pattern.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the prompt header for the next guess
pub fn print_turn_header(row: usize, remaining_secs: u64, budget_secs: u64, low: bool) {
    let clock = format_clock(remaining_secs);
    let clock = if low {
        clock.bright_red().bold()
    } else {
        clock.bright_cyan().bold()
    };
    println!(
        "\nGuess {}/{ROWS}   ⏱ {clock} {}",
        row + 1,
        time_bar(remaining_secs, budget_secs, 20).bright_black()
    );
}

/// Print the end-of-round banner with the guess history
pub fn print_round_over<'a>(
    status: RoundStatus,
    target: &Word,
    history: impl IntoIterator<Item = &'a (Word, Pattern)>,
) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    let headline = match status {
        RoundStatus::Won => "🎉  S O L V E D !  🎉".bright_green().bold(),
        RoundStatus::LostByTimeout => "⏰  TIME'S UP!".bright_red().bold(),
        RoundStatus::LostByRows => "❌  OUT OF GUESSES".bright_red().bold(),
        RoundStatus::InProgress => "Round in progress".normal(),
    };
    println!("  {headline}");
    println!("{}", "═".repeat(50).bright_cyan());

    println!("\n  The word was: {}", target.text().bright_green().bold());

    println!("\n  Guess history:");
    for (i, (word, pattern)) in history.into_iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_row(word, pattern),
            pattern.to_emoji()
        );
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Session:".bright_cyan().bold());
    println!(
        "   Played: {}  Won: {}  Win rate: {:.0}%  Streak: {} (best {})",
        stats.total_games,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );
    println!(
        "   Timeouts: {}  Out of guesses: {}",
        stats.lost_by_timeout, stats.lost_by_rows
    );

    if stats.games_won == 0 {
        return;
    }
    for guesses in 1..=ROWS {
        let count = stats.guess_distribution[guesses];
        let pct = count as f64 / stats.games_won as f64 * 100.0;
        let bar_width = (pct / 5.0) as usize;
        println!(
            "   {guesses}: {}{} {count}",
            "█".repeat(bar_width).green(),
            "░".repeat(20_usize.saturating_sub(bar_width)).bright_black()
        );
    }
}
