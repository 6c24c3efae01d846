//! Tab Selector Component
//!
//! A horizontal selector used for both the bottom tab bar and the category
//! pills on the home screen. Uses a `▶` marker for the selected item.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_TAG_SELECTED};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Create a new tab item with the same label for both normal and compact modes
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
        }
    }

    /// Create a new tab item with different labels for normal and compact modes
    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the currently selected tab
/// * `focused` - Whether the tab selector is currently focused
/// * `ctx` - Layout context for responsive sizing
///
/// # Returns
/// A `Line` containing the rendered tab selector
pub fn render_tab_selector<'a>(
    items: &[TabItem<'a>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    // Add leading padding
    spans.push(Span::raw("  "));

    for (idx, item) in items.iter().enumerate() {
        let is_selected = idx == selected;

        // Use short labels on compact screens
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if is_selected {
            let marker_style = if focused {
                Style::default()
                    .fg(COLOR_TAG_SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };

            let text_style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled("▶ ".to_string(), marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        // Add spacing between tabs (except after last)
        if idx < items.len() - 1 {
            let spacing = if ctx.is_compact() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
