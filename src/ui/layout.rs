use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: nav bar | section content | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(5),    // Section content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// Center a popup inside `area`: a percentage of its size with a minimum,
/// never larger than the area minus a small margin.
pub fn popup_area(area: Rect, percent_w: u16, percent_h: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = (area.width * percent_w / 100)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = (area.height * percent_h / 100)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + area.width.saturating_sub(popup_w) / 2;
    let popup_y = area.y + area.height.saturating_sub(popup_h) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

/// Split a modal's inner area into body and a one-line help footer.
pub fn split_footer(inner: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_layout() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.nav_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.content, Rect::new(0, 1, 80, 22));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_popup_is_centered() {
        let popup = popup_area(Rect::new(0, 0, 100, 40), 50, 50, 10, 10);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_popup_minimum_and_clamp() {
        let popup = popup_area(Rect::new(0, 0, 100, 40), 10, 10, 44, 18);
        assert_eq!((popup.width, popup.height), (44, 18));

        let tiny = popup_area(Rect::new(0, 0, 30, 10), 50, 50, 44, 18);
        assert_eq!((tiny.width, tiny.height), (26, 8));
        assert_eq!((tiny.x, tiny.y), (2, 1));
    }
}
