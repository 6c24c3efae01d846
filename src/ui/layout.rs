//! Layout helpers.
//!
//! [`LayoutContext`] encapsulates terminal dimensions and provides the
//! proportional sizing calculations the screens use. Passed to render
//! functions so sizing decisions stay in one place.

use ratatui::layout::Rect;

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width clamped to min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Whether the terminal is too narrow for decorative chrome.
    pub fn is_compact(&self) -> bool {
        self.width < 70 || self.height < 20
    }

    /// A rect of the given size centered inside `area` (clamped to fit).
    pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_calculations() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_height(25), 10);
        // Minimum of 1 even for tiny percentages
        assert_eq!(LayoutContext::new(10, 10).percent_width(1), 1);
    }

    #[test]
    fn test_bounded_width_clamps() {
        let ctx = LayoutContext::new(200, 40);
        // 30% of 200 = 60, clamped to max of 50
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        // 5% of 200 = 10, raised to min of 20
        assert_eq!(ctx.bounded_width(5, 20, 50), 20);
    }

    #[test]
    fn test_compact_detection() {
        assert!(LayoutContext::new(60, 30).is_compact());
        assert!(LayoutContext::new(100, 15).is_compact());
        assert!(!LayoutContext::new(100, 30).is_compact());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = LayoutContext::centered_rect(area, 60, 20);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = LayoutContext::centered_rect(area, 60, 20);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }
}
