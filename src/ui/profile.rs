//! Profile screen: account details, posted offers, and booked sessions.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::SessionStatus;
use super::helpers::{keybind_hints, render_status_line, render_tab_bar};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS,
};

pub fn render_profile_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // content
        Constraint::Length(1), // status line
        Constraint::Length(2), // tab bar + keybinds
    ])
    .split(area);

    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(user) = app.store.current_user() {
        lines.push(Line::from(Span::styled(
            format!(" {}", user.name),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(" {}", user.email),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {}", user.bio),
            Style::default().fg(COLOR_ACCENT),
        )));
        if let Some(skills) = &user.skills {
            if !skills.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(" Skills: ", Style::default().fg(COLOR_DIM)),
                    Span::styled(skills.join(", "), Style::default().fg(COLOR_ACCENT)),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Your Offers",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )));
        let own_offers = app.store.offers_by_owner(&user.name);
        if own_offers.is_empty() {
            lines.push(Line::from(Span::styled(
                "   Nothing posted yet.",
                Style::default().fg(COLOR_DIM),
            )));
        } else {
            for offer in own_offers {
                lines.push(Line::from(Span::styled(
                    format!("   • {} ({})", offer.title, offer.category),
                    Style::default().fg(COLOR_ACCENT),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Booked Sessions",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )));
        let sessions = app.store.sessions_for_current_user();
        if sessions.is_empty() {
            lines.push(Line::from(Span::styled(
                "   No sessions booked.",
                Style::default().fg(COLOR_DIM),
            )));
        } else {
            for session in sessions {
                let status_color = match session.status {
                    SessionStatus::Confirmed => COLOR_SUCCESS,
                    SessionStatus::Cancelled => COLOR_ERROR,
                    SessionStatus::Completed => COLOR_DIM,
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("   {} with {} ({}m) ", session.start, session.tutor, session.duration_mins),
                        Style::default().fg(COLOR_ACCENT),
                    ),
                    Span::styled(
                        format!("[{}]", session.status.label()),
                        Style::default().fg(status_color),
                    ),
                ]));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            " Not signed in.",
            Style::default().fg(COLOR_DIM),
        )));
    }

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, inner);

    render_status_line(frame, chunks[1], app);

    let footer = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(chunks[2]);
    render_tab_bar(frame, footer[0], app, &ctx);
    let hints = keybind_hints(&[
        ("L", "log out"),
        ("Tab", "switch tab"),
        ("Ctrl+C", "quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), footer[1]);
}
