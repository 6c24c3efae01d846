//! Small formatting helpers shared by the screen renderers.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, StatusKind, Tab};
use crate::ui::components::tab_selector::{render_tab_selector, TabItem};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_RATING, COLOR_SUCCESS};

/// ASCII logo shown on the auth screens.
pub const SKILLSWAP_LOGO: [&str; 2] = [
    "█▀ █▄▀ █ █   █   █▀ █ █ █ ▄▀█ █▀█",
    "▄█ █ █ █ █▄▄ █▄▄ ▄█ ▀▄▀▄▀ █▀█ █▀▀",
];

/// Truncate a string to `max_len` display columns, appending "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.width() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.to_string().width();
        if used + w > max_len - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// "Aisha • CS • 60m" meta line for an offer.
pub fn offer_meta(owner: &str, category: &str, duration_mins: u32) -> String {
    format!("{} • {} • {}m", owner, category, duration_mins)
}

/// "★ 4.9" span pair for an offer's rating.
pub fn rating_spans(rating: f64) -> Vec<Span<'static>> {
    vec![
        Span::styled("★ ", Style::default().fg(COLOR_RATING)),
        Span::styled(format!("{:.1}", rating), Style::default().fg(COLOR_ACCENT)),
    ]
}

/// Build the bottom keybind hint line from `(key, action)` pairs.
pub fn keybind_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (idx, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(COLOR_ACCENT),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(COLOR_DIM),
        ));
        if idx < hints.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }
    Line::from(spans)
}

/// Render the transient status line, if a message is active.
pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = &app.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => COLOR_SUCCESS,
        StatusKind::Error => COLOR_ERROR,
    };
    let line = Line::from(Span::styled(
        format!(" {}", status.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the bottom tab bar for the logged-in screens.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let items: Vec<TabItem> = Tab::ALL.iter().map(|t| TabItem::new(t.label())).collect();
    let selected = Tab::ALL
        .iter()
        .position(|t| *t == app.tab)
        .unwrap_or_default();
    let line = render_tab_selector(&items, selected, true, ctx);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("test", 4), "test");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_string_edge_cases() {
        assert_eq!(truncate_string("", 10), "");
        assert_eq!(truncate_string("abc", 3), "abc");
        assert_eq!(truncate_string("abcd", 3), "...");
    }

    #[test]
    fn test_offer_meta_format() {
        assert_eq!(offer_meta("Aisha", "CS", 60), "Aisha • CS • 60m");
    }

    #[test]
    fn test_rating_spans_one_decimal() {
        let spans = rating_spans(4.9);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "★ 4.9");

        let spans = rating_spans(5.0);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "★ 5.0");
    }

    #[test]
    fn test_keybind_hints_contains_pairs() {
        let line = keybind_hints(&[("Enter", "book"), ("Esc", "back")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[Enter] book"));
        assert!(text.contains("[Esc] back"));
    }
}
