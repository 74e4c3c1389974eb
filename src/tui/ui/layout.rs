use ratatui::layout::Constraint;
use ratatui::prelude::{Direction, Layout, Rect};

/// Widest a single card widget is drawn.
const CARD_WIDTH: u16 = 7;

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Split `area` into `n` left-aligned card slots, shrinking them when the hand is wide.
pub(super) fn card_slots(area: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let count = u16::try_from(n).unwrap_or(u16::MAX);
    let width = (area.width / count).min(CARD_WIDTH);
    let mut constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Length(width)).collect();
    constraints.push(Constraint::Min(0));
    let mut slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec();
    slots.truncate(n);
    slots
}
