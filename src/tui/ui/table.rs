use crate::cards::{Card, Suit};
use crate::player::Player;
use crate::table::Street;
use crate::tui::app::{aces_label, AppState};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // board
            Constraint::Min(6),    // seats
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let table = &app.table;
    let config = table.config();
    let header = Paragraph::new(Line::from(format!(
        "Rules: {}   Aces: {}   Jokers: {}   Hand #{}   Deck: {}",
        config.rules.label(),
        aces_label(table),
        if config.jokers { "on" } else { "off" },
        table.hands_played(),
        table.deck_len(),
    )))
    .block(Block::default().title("holdem-eval").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Board (5 slots)
    let board_block =
        Block::default().title(format!("Board - {}", table.street().label())).borders(Borders::ALL);
    let board_area = chunks[1];
    f.render_widget(board_block, board_area);
    let board_cards = table.board().as_slice();
    for (i, slot) in columns(inner(board_area), 5).into_iter().enumerate() {
        let fresh = (table.street() == Street::Flop && i < 3)
            || (table.street() == Street::Turn && i == 3)
            || (table.street() == Street::River && i == 4);
        render_card_widget(f, slot, board_cards.get(i), fresh.then_some(Color::Yellow));
    }

    // Seats: up to five per row
    let seats_area = inner(chunks[2]);
    f.render_widget(Block::default().title("Seats").borders(Borders::ALL), chunks[2]);
    let players = table.players();
    let per_row = players.len().clamp(1, 5);
    let rows = players.len().div_ceil(per_row).max(1);
    let row_height = seats_area.height / rows as u16;
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(row_height)).collect::<Vec<_>>())
        .split(seats_area);
    for (r, row) in players.chunks(per_row).enumerate() {
        for (c, area) in columns(row_chunks[r], per_row).into_iter().enumerate() {
            if let Some(p) = row.get(c) {
                render_player_card(f, area, app, r * per_row + c, p);
            }
        }
    }

    // Status bar
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = vec![Line::from(if table.street() == Street::Showdown {
        winners_line(app)
    } else {
        format!("{} - press Space to deal the next street.", table.street().label())
    })];
    if let Some(err) = app.error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(status) = app.status() {
        left_info.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let right_keys = vec![
        Line::from("Space deal • R rules • A aces"),
        Line::from("J jokers • ? help • Q quit"),
    ];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn winners_line(app: &AppState) -> String {
    let table = &app.table;
    let names: Vec<&str> =
        table.winners().iter().filter_map(|&i| table.players().get(i)).map(Player::alias).collect();
    let category = table
        .winners()
        .first()
        .and_then(|&i| table.players().get(i))
        .and_then(Player::best_hand)
        .map(|b| b.category().label())
        .unwrap_or("--");
    let verb = if names.len() > 1 { "split" } else { "wins" };
    format!("{} {verb} with {category} - press Space for a new hand.", names.join(", "))
}

fn render_player_card(f: &mut Frame, seat_area: Rect, app: &AppState, idx: usize, p: &Player) {
    let table = &app.table;
    let showdown = table.street() == Street::Showdown;
    let winner = showdown && table.winners().contains(&idx);
    let mut title = p.alias().to_string();
    if winner {
        title.push_str(" [WIN]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if winner {
        block = block.border_style(Style::default().fg(Color::Green));
    }
    f.render_widget(block, seat_area);

    let seat_inner = inner(seat_area);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(seat_inner);

    let hole = p.hand().as_slice();
    if !hole.is_empty() {
        for (card, area) in hole.iter().zip(columns(split[0], hole.len())) {
            render_card_widget(f, area, Some(card), Some(Color::Cyan));
        }
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let lines = match p.best_hand().filter(|_| showdown) {
        Some(best) => vec![
            Line::from(best.category().label().to_string()),
            Line::from(Span::styled(
                best.cards().iter().map(Card::label).collect::<Vec<_>>().join(" "),
                dim,
            )),
        ],
        None => vec![Line::from(Span::styled("--", dim))],
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[1]);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / Enter: deal next street, new hand after showdown"),
        Line::from("- R: toggle classic / standard rules"),
        Line::from("- A: toggle aces high / low"),
        Line::from("- J: add or remove jokers (next hand)"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- classic: both hole cards play, no straight flush, first difference decides"),
        Line::from("- standard: best five of seven, straight flush, full kickers"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(s: Option<Suit>) -> Style {
    match s {
        Some(Suit::Hearts) | Some(Suit::Diamonds) => Style::default().fg(Color::Red),
        Some(Suit::Spades) | Some(Suit::Clubs) => Style::default().fg(Color::White),
        None => Style::default().fg(Color::Magenta),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<&Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.label(), suit_style(c.suit()))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
