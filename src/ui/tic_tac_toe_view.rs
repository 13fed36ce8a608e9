use crate::games::tic_tac_toe::{Player, Status, TicTacToe};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const CELL_WIDTH: usize = 7;

pub fn render(frame: &mut Frame, area: Rect, game: &TicTacToe, cursor: usize) {
    let status_style = match game.status() {
        Status::Playing => Style::default().fg(player_color(game.current_player())),
        Status::Won(_) => Theme::success(),
        Status::Draw => Style::default()
            .fg(Theme::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD),
    };

    let mut lines: Vec<Line> = vec![
        Line::default(),
        Line::from(Span::styled(game.status_message(), status_style)),
        Line::default(),
    ];

    let winning = game.winning_line();
    let separator = format!(
        "{}┼{}┼{}",
        "─".repeat(CELL_WIDTH),
        "─".repeat(CELL_WIDTH),
        "─".repeat(CELL_WIDTH)
    );

    for row in 0..3 {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..3 {
            let idx = row * 3 + col;
            if col > 0 {
                spans.push(Span::styled("│", Theme::border()));
            }
            let in_win = winning.is_some_and(|line| line.contains(&idx));
            spans.push(cell_span(game, idx, idx == cursor && !game.is_over(), in_win));
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::from(Span::styled(separator.clone(), Theme::border())));
        }
    }

    if game.is_over() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" to play again", Theme::text_secondary()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn cell_span(game: &TicTacToe, idx: usize, is_cursor: bool, in_win: bool) -> Span<'static> {
    let (text, mut style) = match game.cells()[idx] {
        Some(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        // Empty cells show the digit that fills them
        None => ((idx + 1).to_string(), Theme::text_muted()),
    };
    if in_win {
        style = style.fg(Theme::BG_DARK).bg(Theme::ACCENT_GREEN);
    } else if is_cursor {
        style = style.bg(Theme::BG_ELEVATED).add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("{:^width$}", text, width = CELL_WIDTH), style)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Theme::ACCENT_AMBER,
        Player::O => Theme::ACCENT_LAVENDER,
    }
}
