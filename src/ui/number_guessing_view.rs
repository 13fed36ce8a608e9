use crate::games::number_guessing::{NumberGuessing, Status, MAX_ATTEMPTS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Your guess: ";

pub fn render(frame: &mut Frame, area: Rect, game: &NumberGuessing, input: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Input field
            Constraint::Min(3),    // Feedback
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            "Guess a number between 1 and 100!",
            Theme::title(),
        )),
        Line::from(vec![
            Span::styled("Attempts: ", Theme::text_secondary()),
            Span::styled(
                format!("{}/{}", game.attempts(), MAX_ATTEMPTS),
                Style::default().fg(Theme::ACCENT_AMBER),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

    render_input(frame, chunks[1], game, input);
    render_feedback(frame, chunks[2], game);
}

fn render_input(frame: &mut Frame, area: Rect, game: &NumberGuessing, input: &str) {
    let border_style = if game.is_over() {
        Theme::border()
    } else {
        Theme::border_focused()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(border_style);
    let inner = block.inner(area);

    let line = Line::from(vec![
        Span::styled(PROMPT, Theme::text_secondary()),
        Span::styled(input.to_string(), Theme::title()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if !game.is_over() && inner.width > 0 {
        let offset = (PROMPT.width() + input.width()) as u16;
        let cursor_x = inner.x + offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, game: &NumberGuessing) {
    let message_style = match game.status() {
        Status::Playing => Theme::text(),
        Status::Won => Theme::success(),
        Status::Lost => Theme::failure(),
    };

    let mut lines = vec![Line::from(Span::styled(
        game.last_message().to_string(),
        message_style,
    ))];

    if let Some(secret) = game.revealed_secret() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("The secret number was ", Theme::text_secondary()),
            Span::styled(
                secret.to_string(),
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    if let Some(note) = game.closing_note() {
        lines.push(Line::from(Span::styled(
            note,
            Style::default()
                .fg(Theme::ACCENT_LAVENDER)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" to play again", Theme::text_secondary()),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
