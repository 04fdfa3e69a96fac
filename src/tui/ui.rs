//! UI rendering for the player.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, List, ListItem},
    style::{Color, Style, Modifier},
};
use crate::Trit;
use crate::ast::{render_with_slots, NodeId, SlotState};
use crate::catalog;
use crate::play::current_result;
use super::app::PlayerApp;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &PlayerApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(frame.area());

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(chunks[0]);

    draw_puzzle(frame, left_chunks[0], app);
    draw_status(frame, left_chunks[1], app);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .split(chunks[1]);

    draw_slots(frame, right_chunks[0], app);
    draw_help(frame, right_chunks[1]);
}

/// Draw the puzzle expression and live result.
fn draw_puzzle(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let puzzle = &catalog::all()[app.puzzle_index];
    let mut content = vec![
        Line::from(Span::styled(puzzle.name, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(puzzle.description, Style::default().fg(Color::DarkGray))),
        Line::from(""),
    ];

    if let Some(template) = app.loader.template() {
        content.push(Line::from(Span::styled(
            render_with_slots(template),
            Style::default().fg(Color::White),
        )));
        content.push(Line::from(""));

        let (text, style) = match current_result(template) {
            Some(t) => (format!("{}", t), trit_style(t)),
            None => ("incomplete".to_string(), Style::default().fg(Color::DarkGray)),
        };
        content.push(Line::from(vec![
            Span::raw("Left side: "),
            Span::styled(text, style),
            Span::raw("   Target: "),
            Span::styled(format!("{}", template.answer()), trit_style(template.answer())),
            Span::raw(format!("   Mistakes: {}", app.checker.errors())),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(format!(" Puzzle {}/{} ", app.puzzle_index + 1, catalog::all().len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(paragraph, area);
}

/// Draw the slot list with cursor and lock markers.
fn draw_slots(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let selected = app.selected();
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(template) = app.loader.template() {
        for (i, leaf) in template.value_slots().iter().enumerate() {
            let text = slot_text(leaf.state().value().map(|v| v.to_string()), leaf.state().is_locked());
            items.push(slot_item(NodeId::Value(i), text, leaf.is_locked(), selected));
        }
        for (i, node) in template.operator_slots().iter().enumerate() {
            let content = match node.state() {
                SlotState::Unset => None,
                SlotState::Open(op) | SlotState::Locked(op) => Some(op.keyword().to_string()),
            };
            let text = slot_text(content, node.is_locked());
            items.push(slot_item(NodeId::Operator(i), text, node.is_locked(), selected));
        }
    }

    let list = List::new(items)
        .block(Block::default()
            .title(" Slots ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));

    frame.render_widget(list, area);
}

fn slot_text(content: Option<String>, locked: bool) -> String {
    let content = content.unwrap_or_else(|| "?".to_string());
    if locked { format!("{} (locked)", content) } else { content }
}

fn slot_item(id: NodeId, text: String, locked: bool, selected: Option<NodeId>) -> ListItem<'static> {
    let is_current = selected == Some(id);
    let prefix = if is_current { "▶ " } else { "  " };

    let style = if is_current {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    ListItem::new(format!("{}{}: {}", prefix, id, text)).style(style)
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("←→: Select  space: Cycle  0/1/2: Set"),
        Line::from("c: Check  x: Reset  n/p: Next/prev puzzle"),
        Line::from("q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// Get color style for a trit.
fn trit_style(t: Trit) -> Style {
    match t {
        Trit::False => Style::default().fg(Color::Red),
        Trit::Neutral => Style::default().fg(Color::Gray),
        Trit::True => Style::default().fg(Color::Green),
    }
}
