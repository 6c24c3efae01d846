//! Input Field Component
//!
//! A text input field with focus handling, password masking, and optional
//! placeholder text. Rounded borders to match the rest of the chrome.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            placeholder: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the value (for passwords)
    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows consumed by one input field: label (1) + bordered box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Render an input field with label and bordered input box
///
/// # Returns
/// The height consumed by this input field
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    _ctx: &LayoutContext,
) -> u16 {
    let mut y_offset = 0;

    // Render label
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let label = Paragraph::new(Line::from(Span::styled(config.label, label_style)));
    frame.render_widget(label, label_area);
    y_offset += 1;

    // Render input box
    let input_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 3,
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    // Prepare display value
    let display_value = if config.is_password {
        "\u{2022}".repeat(config.value.chars().count()) // Bullet character
    } else if config.value.is_empty() && config.placeholder.is_some() {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };

    let text_style = if config.value.is_empty() && config.placeholder.is_some() {
        Style::default().fg(COLOR_DIM)
    } else if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    // Add cursor if focused
    let mut content = display_value.clone();
    if config.focused {
        content.push('\u{2588}'); // Block cursor
    }

    let input_text = Paragraph::new(Line::from(Span::styled(content, text_style))).block(block);

    frame.render_widget(input_text, input_area);
    y_offset += 3;

    y_offset
}

// ============================================================================
// Tests
// ============================================================================
