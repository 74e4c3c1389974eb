use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____  _            _    _            _
| __ )| | __ _  ___| | _(_) __ _  ___| | __
|  _ \| |/ _` |/ __| |/ / |/ _` |/ __| |/ /
| |_) | | (_| | (__|   <| | (_| | (__|   <
|____/|_|\__,_|\___|_|\_\/ |\__,_|\___|_|\_\
                      |__/
            A♠  K♥   =  21                 "#;

const KEYS: &str = "[↑/↓] Select  [+/-] Adjust  [Enter] New session  [Esc] Back to table  [Q] Leave";

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("blackjack-rs").borders(Borders::ALL), area);

    let logo: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::Green)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));

    f.render_widget(Paragraph::new(logo).alignment(Alignment::Center), rows[0]);
    f.render_widget(
        Paragraph::new(settings_lines(app)).wrap(Wrap { trim: true }).alignment(Alignment::Center),
        rows[1],
    );
}

fn settings_lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled("Table settings:", Style::default().bold())];
    lines.extend(app.menu_items_display().into_iter().enumerate().map(|(i, item)| {
        if i == app.menu_index {
            Line::styled(format!("> {item} <"), Style::default().fg(Color::Yellow).bold())
        } else {
            Line::from(item)
        }
    }));
    lines.push(Line::from(""));

    let rounds = app.session.history().len();
    let note = if rounds == 0 {
        "Applying deals a fresh shoe with the new chip count.".to_string()
    } else {
        format!(
            "Current table: {} chips after {rounds} round{}. Applying cashes out and starts over.",
            app.session.balance(),
            if rounds == 1 { "" } else { "s" }
        )
    };
    lines.push(Line::from(note));
    lines.push(Line::styled(KEYS, Style::default().dim()));
    lines
}
