use crate::games::calculator::{Calculator, Operator};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Keypad rows as drawn; operators sit in the right column.
const KEYPAD: [[char; 4]; 4] = [
    ['7', '8', '9', '÷'],
    ['4', '5', '6', '×'],
    ['1', '2', '3', '-'],
    ['0', '.', '=', '+'],
];

pub fn render(frame: &mut Frame, area: Rect, calc: &Calculator) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(5),    // Keypad
        ])
        .split(area);

    render_display(frame, chunks[0], calc);
    render_keypad(frame, chunks[1], calc);
}

fn render_display(frame: &mut Frame, area: Rect, calc: &Calculator) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_DARK));

    let expression = calc.pending_expression().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(expression, Theme::text_muted())),
        Line::from(Span::styled(
            calc.display().to_string(),
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Right),
        area,
    );
}

fn render_keypad(frame: &mut Frame, area: Rect, calc: &Calculator) {
    let pending = calc.pending_operator();
    let mut lines: Vec<Line> = vec![Line::default()];

    for row in KEYPAD.iter() {
        let spans: Vec<Span> = row
            .iter()
            .flat_map(|key| [Span::styled(format!("  {}  ", key), key_style(*key, pending)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "       C  (clear)       ",
        Style::default()
            .fg(Theme::BG_DARK)
            .bg(Theme::ACCENT_RED)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn key_style(key: char, pending: Option<Operator>) -> Style {
    match Operator::from_key(key) {
        Some(op) if Some(op) == pending => Theme::selected(),
        Some(_) => Style::default()
            .fg(Theme::ACCENT_AMBER)
            .bg(Theme::BG_ELEVATED)
            .add_modifier(Modifier::BOLD),
        None if key == '=' => Style::default()
            .fg(Theme::BG_DARK)
            .bg(Theme::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD),
        None => Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .bg(Theme::BG_ELEVATED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_covers_every_operator() {
        let ops: Vec<Operator> = KEYPAD
            .iter()
            .flatten()
            .filter_map(|c| Operator::from_key(*c))
            .collect();
        for op in Operator::ALL {
            assert!(ops.contains(&op), "{} missing from keypad", op);
        }
    }

    #[test]
    fn test_pending_operator_is_highlighted() {
        assert_eq!(key_style('×', Some(Operator::Multiply)), Theme::selected());
        assert_ne!(key_style('+', Some(Operator::Multiply)), Theme::selected());
    }
}
