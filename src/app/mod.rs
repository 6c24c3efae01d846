//! Application state.
//!
//! [`App`] owns the [`DomainStore`] plus all screen-level state: which
//! screen and tab are active, form contents, list cursors, and the
//! transient status line. The store holds the domain collections; the
//! screens are pure consumers of both.

mod forms;
mod handlers;
mod navigation;
mod types;

pub use forms::{LoginForm, OfferForm, SignupForm, TextField};
pub use types::{Screen, StatusKind, StatusMessage, Tab};

use crate::models::Offer;
use crate::store::DomainStore;

/// Category tags shown on the home screen, in display order.
pub const CATEGORIES: [&str; 5] = ["All", "CS", "Design", "Soft Skills", "Music"];

/// Top-level application state.
pub struct App {
    /// The in-memory domain store (offers, sessions, current user)
    pub store: DomainStore,
    /// Which screen is currently displayed
    pub screen: Screen,
    /// Selected bottom tab in the logged-in flow
    pub tab: Tab,

    /// Login screen form
    pub login_form: LoginForm,
    /// Signup screen form
    pub signup_form: SignupForm,
    /// Create-offer screen form
    pub offer_form: OfferForm,

    /// Search text on the home screen
    pub search: TextField,
    /// Index into [`CATEGORIES`] of the selected tag
    pub category_index: usize,
    /// Selected row in the filtered home list
    pub home_index: usize,

    /// Offer open on the details screen
    pub selected_offer_id: Option<String>,
    /// Selected slot row on the details screen
    pub slot_index: usize,

    /// Transient feedback line (validation errors, booking confirmations)
    pub status: Option<StatusMessage>,

    /// Set when the user asked to exit
    pub should_quit: bool,
    /// Dirty flag - redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter driving animations and status expiry
    pub tick_count: u64,
    /// Terminal dimensions, updated on resize
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl App {
    /// Create the application around an existing store.
    ///
    /// The store is constructed by the caller (seeded in `main`, empty or
    /// seeded in tests) and owned here for the rest of the process.
    pub fn new(store: DomainStore) -> Self {
        Self {
            store,
            screen: Screen::default(),
            tab: Tab::default(),
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            offer_form: OfferForm::default(),
            search: TextField::new(),
            category_index: 0,
            home_index: 0,
            selected_offer_id: None,
            slot_index: 0,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Advance the tick counter and expire a stale status message.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(status) = &self.status {
            if status.is_expired(self.tick_count) {
                self.status = None;
                self.mark_dirty();
            }
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Request application exit.
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Record the terminal dimensions after a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Show an informational status message.
    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text, self.tick_count));
        self.mark_dirty();
    }

    /// Show an error status message.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text, self.tick_count));
        self.mark_dirty();
    }

    /// The currently selected category tag.
    pub fn current_category(&self) -> &'static str {
        CATEGORIES[self.category_index]
    }

    /// Offers matching the home screen's search text and category.
    pub fn filtered_offers(&self) -> Vec<&Offer> {
        self.store
            .search_offers(self.search.value(), self.current_category())
    }

    /// The offer currently highlighted in the home list, if any.
    pub fn highlighted_offer(&self) -> Option<&Offer> {
        self.filtered_offers().get(self.home_index).copied()
    }

    /// The offer open on the details screen, if it still resolves.
    pub fn detail_offer(&self) -> Option<&Offer> {
        self.selected_offer_id
            .as_deref()
            .and_then(|id| self.store.find_offer(id))
    }

    /// Clamp the home selection after the filtered list changed.
    pub(crate) fn clamp_home_index(&mut self) {
        let len = self.filtered_offers().len();
        if len == 0 {
            self.home_index = 0;
        } else if self.home_index >= len {
            self.home_index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_app() -> App {
        App::new(DomainStore::with_seed_offers())
    }

    #[test]
    fn test_new_app_starts_on_login() {
        let app = seeded_app();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.store.current_user().is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_filtered_offers_follow_search_and_category() {
        let mut app = seeded_app();
        assert_eq!(app.filtered_offers().len(), 4);

        app.search.set_value("aisha");
        assert_eq!(app.filtered_offers().len(), 1);

        app.search.clear();
        app.category_index = 2; // Design
        let filtered = app.filtered_offers();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Poster Design in Figma");
    }

    #[test]
    fn test_highlighted_offer_tracks_index() {
        let mut app = seeded_app();
        app.home_index = 1;
        assert_eq!(
            app.highlighted_offer().unwrap().title,
            "Public Speaking Coaching"
        );
    }

    #[test]
    fn test_clamp_home_index_after_filter_shrinks() {
        let mut app = seeded_app();
        app.home_index = 3;
        app.search.set_value("figma");
        app.clamp_home_index();
        assert_eq!(app.home_index, 0);
    }

    #[test]
    fn test_detail_offer_resolves_through_store() {
        let mut app = seeded_app();
        app.selected_offer_id = Some("4".to_string());
        assert_eq!(app.detail_offer().unwrap().title, "Guitar Basics");

        app.selected_offer_id = Some("missing".to_string());
        assert!(app.detail_offer().is_none());
    }

    #[test]
    fn test_status_expires_on_tick() {
        let mut app = seeded_app();
        app.set_info("Booked");
        assert!(app.status.is_some());

        for _ in 0..=StatusMessage::TTL_TICKS {
            app.tick();
        }
        assert!(app.status.is_some(), "still within ttl");
        app.tick();
        assert!(app.status.is_none(), "expired one tick past ttl");
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = seeded_app();
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
