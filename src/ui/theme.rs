//! Color theme constants for the SkillSwap UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info (owner lines, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Star-rating color
pub const COLOR_RATING: Color = Color::Yellow;

/// Category tag color when selected
pub const COLOR_TAG_SELECTED: Color = Color::LightCyan;

/// Confirmed session / success feedback - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Validation and not-found feedback - red
pub const COLOR_ERROR: Color = Color::Red;
