use crate::app::state::{AppState, Modal};
use crate::games::ActiveGame;
use crate::ui::layout::{popup_area, split_footer};
use crate::ui::theme::Theme;
use crate::ui::{calculator_view, details_view, number_guessing_view, tic_tac_toe_view};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(modal) = &state.modal else {
        return;
    };

    let area = popup_area(frame.area(), 60, 80, 44, 20);

    // Clear background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", modal.title()))
        .title_style(Theme::title())
        .title_bottom(Line::from(Span::styled(" Esc to close ", Theme::text_muted())).right_aligned())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 20 {
        return;
    }

    let (body, footer) = if state.config.ui.show_help {
        let (body, footer) = split_footer(inner);
        (body, Some(footer))
    } else {
        (inner, None)
    };

    let keys: &[(&str, &str)] = match modal {
        Modal::Game(ActiveGame::Calculator(calc)) => {
            calculator_view::render(frame, body, calc);
            &[("0-9 .", "Digits"), ("+-*/", "Operator"), ("=", "Equals"), ("C", "Clear"), ("Esc", "Close")]
        }
        Modal::Game(ActiveGame::TicTacToe { game, cursor }) => {
            tic_tac_toe_view::render(frame, body, game, *cursor);
            &[("1-9", "Place"), ("←↑↓→", "Move"), ("Enter", "Place"), ("R", "Restart"), ("Esc", "Close")]
        }
        Modal::Game(ActiveGame::NumberGuessing { game, input }) => {
            number_guessing_view::render(frame, body, game, input);
            if game.is_over() {
                &[("Enter", "Play again"), ("Esc", "Close")]
            } else {
                &[("0-9", "Type"), ("Bksp", "Delete"), ("Enter", "Guess"), ("Esc", "Close")]
            }
        }
        Modal::Details(id) => {
            details_view::render(frame, body, *id);
            &[("Enter", "Close"), ("Esc", "Close")]
        }
    };

    if let Some(footer) = footer {
        frame.render_widget(Paragraph::new(help_line(keys)), footer);
    }
}

/// Keybinding help: amber keys followed by dim labels.
pub fn help_line(keys: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in keys {
        spans.push(Span::styled(*key, Theme::key_hint()));
        spans.push(Span::styled(format!(" {}  ", label), Theme::text_secondary()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_line_spans() {
        let line = help_line(&[("Esc", "Close"), ("R", "Restart")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Esc Close  R Restart  ");
    }
}
