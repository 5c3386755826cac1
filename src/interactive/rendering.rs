//! TUI rendering with ratatui
//!
//! Board, status and message panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, Word};
use crate::game::Cell;
use crate::output::formatters::view_pattern;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE")
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

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Exact => Color::Green,
        LetterFeedback::Misplaced => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn guess_line<'a>(word: &Word, feedback: &[LetterFeedback]) -> Line<'a> {
    let spans: Vec<Span> = word
        .letters()
        .iter()
        .zip(feedback)
        .flat_map(|(&letter, &result)| {
            [tile(char::from(letter), feedback_color(result)), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn view_line<'a>(view: &[Cell]) -> Line<'a> {
    let spans: Vec<Span> = view
        .iter()
        .flat_map(|cell| {
            let span = match *cell {
                Cell::Hidden => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                Cell::Exact(letter) => tile(char::from(letter), Color::Green),
                Cell::Misplaced(letter) => tile(char::from(letter), Color::Yellow),
                Cell::Revealed(letter) => tile(char::from(letter), Color::Cyan),
            };
            [span, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(game) = app.game.as_ref() else {
        let paragraph = Paragraph::new(format!(
            "Type a word length between {} and {} and press Enter",
            app.config.min_word_length, app.config.max_word_length
        ))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let width = game.target().len();
    let mut lines: Vec<Line> = game
        .history()
        .iter()
        .map(|(word, feedback)| guess_line(word, feedback.letters()))
        .collect();

    let empty_row = " · ".repeat(width);
    for _ in 0..game.remaining_guesses() {
        lines.push(Line::styled(
            empty_row.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Word:"));
    lines.push(view_line(game.view()));

    let eliminated = game.knowledge().eliminated();
    if !eliminated.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Eliminated: "),
            Span::styled(eliminated.to_string(), Style::default().fg(Color::Red)),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses gauge
            Constraint::Min(5),    // Messages
            Constraint::Length(if app.show_debug { 8 } else { 0 }),
        ])
        .split(area);

    render_guess_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    if app.show_debug {
        render_debug(f, app, chunks[2]);
    }
}

fn render_guess_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (used, limit) = app
        .game
        .as_ref()
        .map_or((0, app.config.guess_limit), |g| (g.guesses(), g.guess_limit()));
    let ratio = if limit == 0 {
        0.0
    } else {
        (used as f64 / limit as f64).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{used}/{limit} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_debug(f: &mut Frame, app: &App, area: Rect) {
    let content = app.game.as_ref().map_or_else(
        || vec![Line::from("No game in progress")],
        |game| {
            let knowledge = game.knowledge();
            vec![
                Line::from(format!("Word:       {}", game.target())),
                Line::from(format!("View:       {}", view_pattern(game.view()))),
                Line::from(format!("Partial:    {}", knowledge.partial())),
                Line::from(format!("Eliminated: {}", knowledge.eliminated())),
                Line::from(format!("Hint used:  {}", game.hint_used())),
            ]
        },
    );

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Debug ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::LengthSelect => (" Word Length | ESC to quit ", Color::Cyan),
        InputMode::Guess => (" Enter Guess or :HELP :HINT :DEBUG :QUIT ", Color::Yellow),
        InputMode::Finished => (" Press 'n' for new game or 'q' to quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.summary.games, app.summary.win_rate
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let average_text = format!("Avg guesses: {:.2}", app.summary.average_guesses);
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Backspace: Delete | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn length_prompt_is_drawn() {
        let config = GameConfig::default();
        let vocabulary = Vocabulary::from_strs(&["pilot"]);
        let app = App::new(&config, &vocabulary, None, None, StdRng::seed_from_u64(1));

        assert!(rendered(&app).contains("Type a word length between 4 and 8"));
    }

    #[test]
    fn board_shows_guess_and_view() {
        let config = GameConfig::default();
        let vocabulary = Vocabulary::from_strs(&["pilot", "place"]);
        let mut app = App::new(&config, &vocabulary, None, None, StdRng::seed_from_u64(1));
        app.start_game(5);
        app.show_debug = true;
        let target = app.game.as_ref().unwrap().target().clone();
        let other = if target.text() == "PILOT" { "PLACE" } else { "PILOT" };
        app.input_buffer = other.to_string();
        app.submit_input();

        let screen = rendered(&app);
        assert!(screen.contains("1/6 used"));
        assert!(screen.contains(&format!("Word:       {target}")));
    }
}
