//! TUI rendering with ratatui
//!
//! Draws the board, countdown, keyboard and the game-over overlay.

use super::app::App;
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{Board, Clock, RoundStatus, Timer};
use crate::output::formatters::format_clock;
use crate::wordlists::WordProvider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const CORRECT: Color = Color::Rgb(106, 170, 100);
const PRESENT: Color = Color::Rgb(201, 180, 88);
const ABSENT: Color = Color::Rgb(120, 124, 126);
const UNUSED: Color = Color::Rgb(44, 44, 56);
const TIMER_NORMAL: Color = Color::Rgb(120, 180, 240);
const TIMER_WARNING: Color = Color::Rgb(240, 80, 80);

/// Main UI rendering function
pub fn ui<P: WordProvider, C: Clock>(f: &mut Frame, app: &App<P, C>) {
    let session = &app.session;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board + side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Timer
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, session.board(), session.status(), main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, session.board(), chunks[2]);
    render_timer(f, session.timer(), chunks[3]);

    if session.status().is_terminal() {
        render_game_over(f, session.status(), session.target().text(), f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⏱ WORDLE-TIMER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => CORRECT,
        Feedback::Present => PRESENT,
        Feedback::Absent => ABSENT,
        Feedback::Empty => UNUSED,
    }
}

fn render_board(f: &mut Frame, board: &Board, status: RoundStatus, area: Rect) {
    let cursor = board.cursor();
    let mut lines = Vec::with_capacity(board.rows().len() * 2);

    for (row_idx, row) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (col_idx, cell) in row.iter().enumerate() {
            let letter = cell.letter.map_or('·', char::from);
            let mut style = Style::default()
                .fg(Color::White)
                .bg(feedback_color(cell.feedback))
                .add_modifier(Modifier::BOLD);

            let is_cursor = status == RoundStatus::InProgress
                && row_idx == cursor.row
                && col_idx == cursor.col;
            if is_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::SLOW_BLINK);
            }

            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel<P: WordProvider, C: Clock>(f: &mut Frame, app: &App<P, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let budget = app.session.timer().budget_secs();
    let instructions = vec![
        Line::from(Span::styled(
            "HOW TO PLAY",
            Style::default()
                .fg(Color::Rgb(200, 220, 255))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Try to guess the hidden word"),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(CORRECT)),
            Span::raw(" correct letter, correct spot"),
        ]),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(PRESENT)),
            Span::raw(" correct letter, wrong spot"),
        ]),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(ABSENT)),
            Span::raw(" letter not in the word"),
        ]),
        Line::from(format!("You have {} to solve it!", format_clock(budget))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: submit  Backspace: erase  Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(instructions)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Instructions ")
                .borders(Borders::ALL),
        );
    f.render_widget(help, chunks[0]);

    let stats = app.session.statistics();
    let stats_lines = vec![
        Line::from(format!(
            "Games: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {} (best {})",
            stats.current_streak, stats.best_streak
        )),
        Line::from(format!(
            "Timeouts: {} | Out of rows: {}",
            stats.lost_by_timeout, stats.lost_by_rows
        )),
        Line::from(format!(
            "Guesses used: {}",
            app.session.round().guesses_used()
        )),
    ];

    let stats_widget = Paragraph::new(stats_lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(stats_widget, chunks[1]);
}

fn render_keyboard(f: &mut Frame, board: &Board, area: Rect) {
    let states = board.letter_states();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|key| {
                    let feedback = states.get(&key).copied().unwrap_or_default();
                    [
                        Span::styled(
                            format!(" {} ", char::from(key)),
                            Style::default()
                                .fg(Color::White)
                                .bg(feedback_color(feedback)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_timer(f: &mut Frame, timer: &Timer, area: Rect) {
    let color = if timer.is_low() {
        TIMER_WARNING
    } else {
        TIMER_NORMAL
    };

    let budget = timer.budget_secs().max(1);
    let percent = (timer.remaining_secs() * 100 / budget).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("⏱ {}", format_clock(timer.remaining_secs())));

    f.render_widget(gauge, area);
}

fn render_game_over(f: &mut Frame, status: RoundStatus, target: &str, area: Rect) {
    let (headline, color) = match status {
        RoundStatus::Won => ("🎉 SOLVED! 🎉", CORRECT),
        RoundStatus::LostByTimeout => ("TIME'S UP!", TIMER_WARNING),
        RoundStatus::LostByRows => ("OUT OF GUESSES", TIMER_WARNING),
        RoundStatus::InProgress => return,
    };

    let popup = centered_rect(50, 9, area);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                target.to_string(),
                Style::default().fg(CORRECT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press SPACE to play again, ESC to quit",
            Style::default().fg(Color::Rgb(180, 220, 255)),
        )),
    ];

    let overlay = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color).bg(Color::Rgb(20, 20, 30))),
    );

    f.render_widget(Clear, popup);
    f.render_widget(overlay, popup);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
