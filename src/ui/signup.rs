use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use super::components::input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use super::helpers::{keybind_hints, render_status_line, SKILLSWAP_LOGO};
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_signup_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let inner = area.inner(Margin::new(2, 1));
    if inner.height < 4 {
        return;
    }

    let logo_area = Rect::new(inner.x, inner.y, inner.width, 2.min(inner.height));
    let logo = Paragraph::new(SKILLSWAP_LOGO.join("\n"))
        .style(Style::default().fg(COLOR_HEADER))
        .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let tagline_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
    let tagline = Paragraph::new("Join and start swapping skills")
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, tagline_area);

    let dialog_width = ctx.bounded_width(60, 40, 64).min(inner.width);
    let dialog_height = (2 + 3 * INPUT_FIELD_HEIGHT).min(inner.height.saturating_sub(4));
    let dialog = Rect::new(
        inner.x + (inner.width - dialog_width) / 2,
        inner.y + 4,
        dialog_width,
        dialog_height,
    );
    let dialog_block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(dialog_block, dialog);

    let fields = [
        InputFieldConfig::new("Name", app.signup_form.name.value())
            .focused(app.signup_form.focus == 0),
        InputFieldConfig::new("Email", app.signup_form.email.value())
            .focused(app.signup_form.focus == 1)
            .placeholder("you@university.edu"),
        InputFieldConfig::new("Password", app.signup_form.password.value())
            .focused(app.signup_form.focus == 2)
            .password(true),
    ];
    let mut y = dialog.y + 1;
    for config in &fields {
        if y + INPUT_FIELD_HEIGHT > inner.y + inner.height {
            break;
        }
        let field_area = Rect::new(dialog.x, y, dialog.width, INPUT_FIELD_HEIGHT);
        y += render_input_field(frame, field_area, config, &ctx);
    }

    let status_area = Rect::new(inner.x, inner.y + inner.height - 2, inner.width, 1);
    render_status_line(frame, status_area, app);

    let hints_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let hints = keybind_hints(&[
        ("Enter", "sign up"),
        ("Tab", "next field"),
        ("Esc", "back to sign in"),
        ("Ctrl+C", "quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), hints_area);
}
