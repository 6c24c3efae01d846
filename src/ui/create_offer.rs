//! Create-offer screen: the post-an-offer form.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use super::components::input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use super::helpers::{keybind_hints, render_status_line, render_tab_bar};
use super::layout::LayoutContext;
use super::theme::COLOR_BORDER;

pub fn render_create_offer_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // form
        Constraint::Length(1), // status line
        Constraint::Length(2), // tab bar + keybinds
    ])
    .split(area);

    let block = Block::default()
        .title(" Post an Offer ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let form = &app.offer_form;
    let fields: [InputFieldConfig; 4] = [
        InputFieldConfig::new("Title", form.title.value())
            .focused(form.focus == 0)
            .placeholder("What can you teach?"),
        InputFieldConfig::new("Category", form.category.value()).focused(form.focus == 1),
        InputFieldConfig::new("Duration (mins)", form.duration.value()).focused(form.focus == 2),
        InputFieldConfig::new("Description", form.description.value())
            .focused(form.focus == 3)
            .placeholder("Describe the session"),
    ];

    let mut y = inner.y;
    for config in &fields {
        if y + INPUT_FIELD_HEIGHT > inner.y + inner.height {
            break;
        }
        let field_area = Rect::new(inner.x, y, inner.width, INPUT_FIELD_HEIGHT);
        y += render_input_field(frame, field_area, config, &ctx);
    }

    render_status_line(frame, chunks[1], app);

    let footer = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(chunks[2]);
    render_tab_bar(frame, footer[0], app, &ctx);
    let hints = keybind_hints(&[
        ("↑↓", "field"),
        ("Enter", "post"),
        ("Tab", "switch tab"),
        ("Ctrl+C", "quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), footer[1]);
}
