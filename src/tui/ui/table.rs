use crate::cards::{Card, Suit};
use crate::game::{Phase, RoundResult};
use crate::score::score;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Min(5),                // dealer
            Constraint::Min(5),                // player
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let session = &app.session;
    let game = session.game();
    let view = game.view();

    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(format!(
        "Balance: ${}   Bet: {}   Round: {}",
        session.balance(),
        session.bet().or(session.last_bet()).map(|b| b.to_string()).unwrap_or_else(|| "--".into()),
        game.rounds_played() + u64::from(session.round_in_progress()),
    )));
    header_lines.push(Line::from(format!(
        "Deck: {} left   Reshuffles: {}   Dealer stands on 17",
        game.deck_remaining(),
        game.reshuffles()
    )));
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("blackjack-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let settled = game.phase() == Phase::Settled;
    let result = game.result();

    // Dealer hand
    let dealer_score = if view.dealer.is_empty() {
        String::from("--")
    } else if view.dealer_hidden {
        format!("{} + ?", view.dealer_score_shown())
    } else {
        view.dealer_score_shown().to_string()
    };
    let mut dealer_block =
        Block::default().title(format!("Dealer ({dealer_score})")).borders(Borders::ALL);
    if settled && matches!(result, Some(RoundResult::HouseWin | RoundResult::HouseBlackjack)) {
        dealer_block = dealer_block.border_style(Style::default().fg(Color::Green));
    } else if game.phase() == Phase::DealerTurn {
        dealer_block = dealer_block.border_style(Style::default().fg(Color::Yellow));
    }
    f.render_widget(dealer_block, chunks[1]);
    let dealer_slots = card_slots(inner(chunks[1]), view.dealer.len());
    for (i, (card, slot)) in view.dealer.iter().zip(dealer_slots).enumerate() {
        let shown = if i == 0 && view.dealer_hidden { None } else { Some(*card) };
        render_card_widget(f, slot, shown, None);
    }

    // Player hand
    let player_score = score(view.player);
    let player_title = if view.player.is_empty() {
        String::from("Player")
    } else if player_score > 21 {
        format!("Player ({player_score}) BUST")
    } else {
        format!("Player ({player_score})")
    };
    let mut player_block = Block::default().title(player_title).borders(Borders::ALL);
    if settled && result.is_some_and(RoundResult::player_won) {
        player_block = player_block.border_style(Style::default().fg(Color::Green));
    } else if app.can_play() {
        player_block = player_block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(player_block, chunks[2]);
    let player_slots = card_slots(inner(chunks[2]), view.player.len());
    for (card, slot) in view.player.iter().zip(player_slots) {
        render_card_widget(f, slot, Some(*card), Some(Color::Cyan));
    }

    // Status bar: split horizontally for info vs keys
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info: Vec<Line> = match game.phase() {
        _ if session.is_over() => vec![
            Line::from(Span::styled("Out of money.", Style::default().fg(Color::Red))),
            Line::from("Press M for the menu to start over."),
        ],
        Phase::Setup => vec![Line::from("Press Space to place a bet and deal.")],
        Phase::PlayerTurn => vec![Line::from("Your move: hit or stand.")],
        Phase::DealerTurn => vec![Line::from("Dealer is drawing...")],
        _ => {
            let mut lines = Vec::with_capacity(2);
            if let Some(record) = session.last_record() {
                lines.push(Line::from(Span::styled(
                    format!("{}  {:+}", record.result.label(), record.delta),
                    result_style(record.result),
                )));
            }
            lines.push(Line::from("Press Space for the next round."));
            lines
        }
    };

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    if !session.is_over() {
        left_info.push(Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("Space bet", action_style(app.can_bet())),
            Span::raw(" • "),
            Span::styled("H hit", action_style(app.can_play())),
            Span::raw(" • "),
            Span::styled("S stand", action_style(app.can_play())),
        ]));
    }

    let right_keys =
        vec![Line::from(""), Line::from("? help • R rounds • L log"), Line::from("M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.log_open() {
        draw_log(f, app);
    } else if app.bet_entry_active() {
        draw_bet_entry(f, app);
    }
}

fn result_style(result: RoundResult) -> Style {
    match result {
        RoundResult::PlayerWin | RoundResult::PlayerBlackjack => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        }
        RoundResult::HouseWin | RoundResult::HouseBlackjack => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        RoundResult::Tie => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Rounds").borders(Borders::ALL);
    let history = app.session.history();
    let end = history.len().saturating_sub(app.scroll());
    let start = end.saturating_sub(AppState::HISTORY_PAGE_SIZE);
    let mut lines: Vec<Line> = Vec::new();
    if history.is_empty() {
        lines.push(Line::from("No rounds played yet."));
    } else {
        for r in &history[start..end] {
            lines.push(Line::from(vec![
                Span::raw(format!("#{:<3} bet {:<6} ", r.round, r.bet)),
                Span::styled(format!("{:<17}", r.result.label()), result_style(r.result)),
                Span::raw(format!(
                    " {} vs {}  {:+}  → ${}",
                    r.player_score, r.dealer_score, r.delta, r.balance
                )),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: R or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_log(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    let block = Block::default().title("Log").borders(Borders::ALL);
    let entries = app.log().recent(AppState::HISTORY_PAGE_SIZE, app.scroll());
    let mut lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from("Nothing logged yet.")]
    } else {
        entries.into_iter().map(Line::from).collect()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / B / Enter: place a bet and deal"),
        Line::from("- H: hit"),
        Line::from("- S: stand"),
        Line::from("- R: round history"),
        Line::from("- L: log"),
        Line::from(""),
        Line::from(Span::styled("Bet Entry:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 0-9: edit amount"),
        Line::from("- Backspace: delete digit"),
        Line::from("- + / -: adjust by bet step"),
        Line::from("- Enter: deal"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Payouts:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Win: 1x bet • Blackjack: 2x bet • Tie: bet returned"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply (new session)"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_bet_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.bet_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Bet: {current}")),
        Line::from(format!("Max: {}", app.session.balance())),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from(format!("+/- by {}, Enter deal, Esc cancel", app.config.bet_step)),
    ];
    let block = Block::default().title("Place Bet").borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.bet_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Draw one card; `None` draws it face down.
fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.to_string(), suit_style(c.suit()))),
        None => Line::from(Span::styled("■■", Style::default().fg(Color::DarkGray))),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
