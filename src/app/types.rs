//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Tab`] - Which bottom tab is selected in the logged-in flow
//! - [`StatusMessage`] - Transient feedback line (the mobile app's alerts)

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    Home,
    OfferDetails,
    CreateOffer,
    Profile,
}

impl Screen {
    /// Whether this screen belongs to the unauthenticated flow.
    pub fn is_auth(&self) -> bool {
        matches!(self, Screen::Login | Screen::Signup)
    }
}

/// Bottom tabs shown while logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Create,
    Profile,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Create, Tab::Profile];

    /// Tab label for the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Create => "Create",
            Tab::Profile => "Profile",
        }
    }

    /// The screen a tab lands on.
    pub fn screen(&self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Create => Screen::CreateOffer,
            Tab::Profile => Screen::Profile,
        }
    }

    /// Next tab to the right, wrapping around.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Home => Tab::Create,
            Tab::Create => Tab::Profile,
            Tab::Profile => Tab::Home,
        }
    }

    /// Previous tab to the left, wrapping around.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Home => Tab::Profile,
            Tab::Create => Tab::Home,
            Tab::Profile => Tab::Create,
        }
    }
}

/// Severity of a status message, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient feedback shown in the status line.
///
/// Expires after a number of ticks so stale messages do not linger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// Tick count at which the message was set
    pub set_at_tick: u64,
}

impl StatusMessage {
    /// Ticks before a status message disappears (~4s at the 16ms tick).
    pub const TTL_TICKS: u64 = 250;

    pub fn info(text: impl Into<String>, tick: u64) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
            set_at_tick: tick,
        }
    }

    pub fn error(text: impl Into<String>, tick: u64) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
            set_at_tick: tick,
        }
    }

    /// Whether the message has outlived its time-to-live.
    pub fn is_expired(&self, current_tick: u64) -> bool {
        current_tick.saturating_sub(self.set_at_tick) > Self::TTL_TICKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default_is_login() {
        assert_eq!(Screen::default(), Screen::Login);
    }

    #[test]
    fn test_auth_screens() {
        assert!(Screen::Login.is_auth());
        assert!(Screen::Signup.is_auth());
        assert!(!Screen::Home.is_auth());
        assert!(!Screen::Profile.is_auth());
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Home.next(), Tab::Create);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
        assert_eq!(Tab::Create.prev(), Tab::Home);
    }

    #[test]
    fn test_tab_screens() {
        assert_eq!(Tab::Home.screen(), Screen::Home);
        assert_eq!(Tab::Create.screen(), Screen::CreateOffer);
        assert_eq!(Tab::Profile.screen(), Screen::Profile);
    }

    #[test]
    fn test_status_message_expiry() {
        let msg = StatusMessage::info("Booked", 10);
        assert!(!msg.is_expired(10));
        assert!(!msg.is_expired(10 + StatusMessage::TTL_TICKS));
        assert!(msg.is_expired(11 + StatusMessage::TTL_TICKS));
    }
}
