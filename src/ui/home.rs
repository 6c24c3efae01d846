//! Home screen: search, category tags, and the offer list.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, CATEGORIES};
use super::components::input_field::{render_input_field, InputFieldConfig};
use super::components::tab_selector::{render_tab_selector, TabItem};
use super::helpers::{keybind_hints, offer_meta, rating_spans, render_status_line, render_tab_bar};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_home_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let chunks = Layout::vertical([
        Constraint::Length(1),          // header
        Constraint::Length(4),          // search input
        Constraint::Length(1),          // category tags
        Constraint::Min(1),             // offer list
        Constraint::Length(1),          // status line
        Constraint::Length(2),          // tab bar + keybinds
    ])
    .split(area);

    render_header(frame, chunks[0], app);

    render_input_field(
        frame,
        chunks[1],
        &InputFieldConfig::new("Search", app.search.value())
            .focused(true)
            .placeholder("Search skills or people"),
        &ctx,
    );

    let tags: Vec<TabItem> = CATEGORIES.iter().map(|c| TabItem::new(*c)).collect();
    let tag_line = render_tab_selector(&tags, app.category_index, true, &ctx);
    frame.render_widget(Paragraph::new(tag_line), chunks[2]);

    render_offer_list(frame, chunks[3], app);

    render_status_line(frame, chunks[4], app);

    let footer = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(chunks[5]);
    render_tab_bar(frame, footer[0], app, &ctx);
    let hints = keybind_hints(&[
        ("↑↓", "select"),
        ("Enter", "details"),
        ("←→", "category"),
        ("Tab", "switch tab"),
        ("Ctrl+C", "quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), footer[1]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " SkillSwap",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Peer skill exchange", Style::default().fg(COLOR_DIM)),
    ];
    if let Some(user) = app.store.current_user() {
        spans.push(Span::styled(
            format!("    signed in as {}", user.name),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_offer_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Offers ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let offers = app.filtered_offers();
    if offers.is_empty() {
        let empty = Paragraph::new("No offers match your search.")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = offers
        .iter()
        .enumerate()
        .map(|(idx, offer)| {
            let selected = idx == app.home_index;
            let marker = if selected { "▶ " } else { "  " };
            let title_style = if selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };

            let mut title_spans = vec![
                Span::styled(marker.to_string(), title_style),
                Span::styled(offer.title.clone(), title_style),
                Span::raw("  "),
            ];
            title_spans.extend(rating_spans(offer.rating));

            let meta = Line::from(Span::styled(
                format!(
                    "    {}",
                    offer_meta(&offer.owner, &offer.category, offer.duration_mins)
                ),
                Style::default().fg(COLOR_DIM),
            ));

            ListItem::new(vec![Line::from(title_spans), meta])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
