use crate::cards::{Card, Suit};
use crate::draws::Draws;
use crate::engine::{EquityState, Report};
use crate::hand::Street;
use crate::strategy::Action;
use crate::tui::app::{AppState, Field};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner, slots};

pub(super) fn draw_advisor(f: &mut Frame, app: &AppState) {
    let report = app.report();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // entry
            Constraint::Length(5), // cards
            Constraint::Min(8),    // analysis
            Constraint::Length(3), // status
        ])
        .split(f.area());

    draw_entry(f, chunks[0], app);
    draw_cards(f, chunks[1], &report);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(cols[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4), Constraint::Length(3)])
        .split(cols[1]);

    draw_hand(f, left[0], &report);
    draw_outs(f, left[1], &report);
    draw_draws(f, right[0], report.analysis.draws.as_ref());
    draw_odds(f, right[1], &report);
    draw_advice(f, right[2], &report);
    draw_status(f, chunks[3], app);
}

fn draw_entry(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = Vec::new();
    for field in [Field::Cards, Field::Pot, Field::Bet] {
        let style = if field == app.field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{}: [{:<4}]", field.label(), app.entry_text(field)), style));
        spans.push(Span::raw("   "));
    }
    let busy = if app.session.is_busy() { "calculating..." } else { "" };
    spans.push(Span::styled(busy, Style::default().fg(Color::Cyan)));

    let title = format!("holdem-advisor v{}", crate::VERSION);
    let para = Paragraph::new(Line::from(spans)).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_cards(f: &mut Frame, area: Rect, report: &Report) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);
    let situation = &report.analysis.situation;

    let hole_block = Block::default().title("Hole").borders(Borders::ALL);
    f.render_widget(hole_block, cols[0]);
    for (i, slot) in slots(inner(cols[0]), 2).into_iter().enumerate() {
        render_card_widget(f, slot, situation.hole().get(i).copied(), Some(Color::Cyan));
    }

    let street = situation.street();
    let board_block = Block::default().title(format!("Board ({street})")).borders(Borders::ALL);
    f.render_widget(board_block, cols[1]);
    let board = situation.board().as_slice();
    for (i, slot) in slots(inner(cols[1]), 5).into_iter().enumerate() {
        let latest = match street {
            Street::Flop => i < 3,
            Street::Turn => i == 3,
            Street::River => i == 4,
            _ => false,
        };
        render_card_widget(f, slot, board.get(i).copied(), latest.then_some(Color::Yellow));
    }
}

fn draw_hand(f: &mut Frame, area: Rect, report: &Report) {
    let a = &report.analysis;
    let mut lines = Vec::new();
    match (&a.made, &a.starting_hand) {
        (Some(h), _) => {
            lines.push(Line::from(Span::styled(h.to_string(), Style::default().add_modifier(Modifier::BOLD))));
            lines.push(card_line("Key: ", h.key_cards()));
            if !h.kickers().is_empty() {
                lines.push(card_line("Kickers: ", h.kickers()));
            }
        }
        (None, Some(sh)) => {
            lines.push(Line::from(Span::styled(
                format!("{} ({})", sh.notation, sh.tier),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("{} of 1326 deals ({:.2}%)", sh.combos, sh.probability)));
            lines.push(Line::from(format!("Any {:?} hand: {:.2}%", sh.shape, sh.shape_probability)));
        }
        (None, None) => lines.push(dim("Enter cards: hole first, then board")),
    }
    let para = Paragraph::new(lines).block(Block::default().title("Hand").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_outs(f: &mut Frame, area: Rect, report: &Report) {
    let mut lines = Vec::new();
    match &report.analysis.outs {
        Some(o) => {
            lines.push(Line::from(format!("{} outs of {} unseen", o.count(), o.remaining)));
            let by_rank: Vec<String> = o.by_rank.iter().map(|(r, n)| format!("{r}x{n}")).collect();
            if !by_rank.is_empty() {
                lines.push(Line::from(by_rank.join(" ")));
            }
            lines.push(Line::from(format!("Next card: {:.2}%", o.prob_next)));
            let rule = if o.cards_to_come == 2 { 4 } else { 2 };
            lines.push(Line::from(format!("Rule of {rule}: {:.2}%", o.rule_of_thumb)));
            lines.push(Line::from(format!("By the river: {:.2}%", o.prob_to_come)));
        }
        None => lines.push(dim("Outs are counted on the flop and turn")),
    }
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Outs").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_draws(f: &mut Frame, area: Rect, draws: Option<&Draws>) {
    let mut lines = Vec::new();
    match draws {
        Some(d) if !d.is_empty() => {
            if let Some(fl) = &d.flush {
                lines.push(Line::from(format!(
                    "Flush ({}): {} outs, {:.2}% next, {:.2}% total",
                    fl.suit.name(),
                    fl.outs,
                    fl.odds.next,
                    fl.odds.total
                )));
            }
            if let Some(st) = &d.straight {
                let ranks: Vec<String> = st.ranks.iter().map(|r| r.to_string()).collect();
                lines.push(Line::from(format!(
                    "Straight ({}, needs {}): {} outs, {:.2}% total",
                    st.kind,
                    ranks.join("/"),
                    st.outs,
                    st.odds.total
                )));
            }
            if let Some(s) = &d.set {
                lines.push(Line::from(format!("Set: {} outs, {:.2}% total", s.outs, s.odds.total)));
            }
            if let Some(q) = &d.quads {
                lines.push(Line::from(format!("Quads: {} outs, {:.2}% total", q.outs, q.odds.total)));
            }
        }
        Some(_) => lines.push(dim("No draws")),
        None => lines.push(dim("Draws are shown on the flop and turn")),
    }
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Draws").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_odds(f: &mut Frame, area: Rect, report: &Report) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let pot_odds = report.analysis.pot_odds.map_or_else(|| "N/A".to_string(), |p| format!("{p:.2}%"));
    f.render_widget(Paragraph::new(format!(" Pot odds: {pot_odds}")), rows[0]);

    let (ratio, label) = match report.equity {
        EquityState::Ready(e) => {
            ((e.equity() / 100.0).clamp(0.0, 1.0), format!("{:.2}% ({} trials)", e.equity(), e.valid_trials))
        }
        EquityState::Pending => (0.0, "calculating...".to_string()),
        EquityState::NotApplicable => (0.0, "N/A".to_string()),
    };
    let gauge = Gauge::default()
        .block(Block::default().title("Equity").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(label);
    f.render_widget(gauge, rows[1]);
}

fn draw_advice(f: &mut Frame, area: Rect, report: &Report) {
    let (text, color) = match report.action {
        Some(Action::Raise) => ("Raise", Color::Green),
        Some(Action::Call) => ("Call", Color::Yellow),
        Some(Action::Check) => ("Check", Color::Cyan),
        Some(Action::Fold) => ("Fold", Color::Red),
        Some(Action::NotApplicable) => ("N/A", Color::DarkGray),
        None => ("...", Color::DarkGray),
    };
    let para = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().title("Advice").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    let line = match app.error() {
        Some(err) => Line::from(Span::styled(err, Style::default().fg(Color::Red))),
        None => dim("Enter add card  Tab next field  Backspace remove  F2 reset  ? help  Esc quit"),
    };
    let para = Paragraph::new(line).block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(para, area);
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Cards:", bold)),
        Line::from("- type a card (As, Td, 10h) and press Enter"),
        Line::from("- the first two cards are your hole cards, then the board"),
        Line::from("- Backspace on an empty entry removes the last card"),
        Line::from(""),
        Line::from(Span::styled("Pot / Bet:", bold)),
        Line::from("- Tab / Shift-Tab: switch field"),
        Line::from("- 0-9 and Backspace edit the amount"),
        Line::from(""),
        Line::from("- F2: reset everything"),
        Line::from("- Esc: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn dim(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::DIM)))
}

fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn card_span(c: Card) -> Span<'static> {
    Span::styled(c.symbol(), suit_style(c.suit()))
}

fn card_line(label: &'static str, cards: &[Card]) -> Line<'static> {
    let mut spans = vec![Span::raw(label)];
    for c in cards {
        spans.push(card_span(*c));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(card_span(c)),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner);
}
