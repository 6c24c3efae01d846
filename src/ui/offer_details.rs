//! Offer details screen with the slot picker.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;
use super::helpers::{keybind_hints, offer_meta, rating_spans, render_status_line};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_TAG_SELECTED};

pub fn render_offer_details_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Min(1),    // content
        Constraint::Length(1), // status line
        Constraint::Length(1), // keybinds
    ])
    .split(area);

    let block = Block::default()
        .title(" Offer Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let Some(offer) = app.detail_offer() else {
        let missing = Paragraph::new("Offer not found.")
            .style(Style::default().fg(COLOR_ERROR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(missing, chunks[0]);
        render_status_line(frame, chunks[1], app);
        let hints = keybind_hints(&[("Esc", "back"), ("Ctrl+C", "quit")]);
        frame.render_widget(Paragraph::new(hints), chunks[2]);
        return;
    };

    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let sections = Layout::vertical([
        Constraint::Length(1), // title + rating
        Constraint::Length(1), // meta
        Constraint::Length(1), // spacer
        Constraint::Length(4), // description
        Constraint::Min(3),    // slots
    ])
    .split(inner);

    let mut title_spans = vec![
        Span::styled(
            format!(" {}", offer.title),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    title_spans.extend(rating_spans(offer.rating));
    frame.render_widget(Paragraph::new(Line::from(title_spans)), sections[0]);

    let meta = Paragraph::new(Line::from(Span::styled(
        format!(
            " {}",
            offer_meta(&offer.owner, &offer.category, offer.duration_mins)
        ),
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(meta, sections[1]);

    let description = Paragraph::new(format!(" {}", offer.description))
        .style(Style::default().fg(COLOR_ACCENT))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, sections[3]);

    render_slots(frame, sections[4], app, &offer.slots);

    render_status_line(frame, chunks[1], app);

    let hints = keybind_hints(&[
        ("↑↓", "slot"),
        ("Enter", "book"),
        ("Esc", "back"),
        ("Ctrl+C", "quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

fn render_slots(frame: &mut Frame, area: Rect, app: &App, slots: &[String]) {
    let block = Block::default()
        .title(" Available Slots ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if slots.is_empty() {
        let empty = Paragraph::new("No time slots listed.")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = slots
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            let selected = idx == app.slot_index;
            let line = if selected {
                Line::from(vec![
                    Span::styled(
                        "▶ ",
                        Style::default()
                            .fg(COLOR_TAG_SELECTED)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        slot.clone(),
                        Style::default()
                            .fg(COLOR_ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {}", slot),
                    Style::default().fg(COLOR_DIM),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
