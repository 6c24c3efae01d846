//! Navigation and flow methods for the App.
//!
//! Screen transitions plus the auth/booking/posting flows that tie the
//! screens to the store. Every store failure surfaces as a status message;
//! nothing here panics on a missing offer or an empty field.

use super::{App, Screen, Tab};
use crate::models::User;
use crate::store::NewOffer;

impl App {
    /// Switch to a bottom tab and its screen.
    pub fn navigate_to_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.screen = tab.screen();
        self.mark_dirty();
    }

    /// Open the details screen for an offer.
    pub fn open_offer_details(&mut self, offer_id: String) {
        tracing::debug!(offer_id = %offer_id, "opening offer details");
        self.selected_offer_id = Some(offer_id);
        self.slot_index = 0;
        self.screen = Screen::OfferDetails;
        self.mark_dirty();
    }

    /// Open whichever offer is highlighted in the home list.
    pub fn open_highlighted_offer(&mut self) {
        if let Some(offer) = self.highlighted_offer() {
            let id = offer.id.clone();
            self.open_offer_details(id);
        }
    }

    /// Return from the details screen to the home list.
    pub fn close_offer_details(&mut self) {
        self.selected_offer_id = None;
        self.screen = Screen::Home;
        self.mark_dirty();
    }

    /// Attempt login with the form's fields.
    ///
    /// Both fields must be non-empty; there is no real credential check.
    /// Success installs the demo identity and lands on the home tab.
    pub fn submit_login(&mut self) {
        if !self.login_form.is_complete() {
            self.set_error("Missing info: enter email and password");
            return;
        }
        let user = User::demo(self.login_form.email.value());
        self.store.set_current_user(Some(user));
        self.navigate_to_tab(Tab::Home);
    }

    /// Attempt signup with the form's fields.
    pub fn submit_signup(&mut self) {
        if !self.signup_form.is_complete() {
            self.set_error("Missing info: fill all fields");
            return;
        }
        let user = User::signed_up(
            self.signup_form.name.value().trim(),
            self.signup_form.email.value(),
        );
        self.store.set_current_user(Some(user));
        self.navigate_to_tab(Tab::Home);
    }

    /// Clear the current user and return to the login screen.
    pub fn logout(&mut self) {
        self.store.set_current_user(None);
        self.screen = Screen::Login;
        self.tab = Tab::Home;
        self.login_form = super::LoginForm::default();
        self.signup_form = super::SignupForm::default();
        self.set_info("Logged out. See you soon!");
    }

    /// Post the offer described by the create form.
    pub fn submit_offer(&mut self) {
        let fields = NewOffer {
            title: self.offer_form.title.value().to_string(),
            description: self.offer_form.description.value().to_string(),
            category: self.offer_form.category.value().to_string(),
            duration: self.offer_form.duration.value().to_string(),
        };
        match self.store.create_offer(fields) {
            Ok(_) => {
                self.offer_form.reset();
                self.home_index = 0;
                self.set_info("Posted! Your offer is live.");
            }
            Err(err) => self.set_error(err.user_message()),
        }
    }

    /// Book the slot highlighted on the details screen.
    pub fn book_highlighted_slot(&mut self) {
        let Some(offer) = self.detail_offer() else {
            self.set_error("Offer not found.");
            return;
        };
        let Some(slot) = offer.slots.get(self.slot_index).cloned() else {
            return; // offer has no slots; nothing to book
        };
        let offer_id = offer.id.clone();
        match self.store.book_session(&offer_id, &slot) {
            Ok(session) => {
                let text = format!("Booked! Session on {}", session.start);
                self.set_info(text);
            }
            Err(err) => self.set_error(err.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionStatus;
    use crate::store::DomainStore;

    fn seeded_app() -> App {
        App::new(DomainStore::with_seed_offers())
    }

    fn logged_in_app() -> App {
        let mut app = seeded_app();
        app.submit_login();
        app
    }

    #[test]
    fn test_login_with_prefilled_credentials() {
        let mut app = seeded_app();
        app.submit_login();

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.store.current_user().unwrap().name, "You");
    }

    #[test]
    fn test_login_with_empty_password_fails() {
        let mut app = seeded_app();
        app.login_form.password.clear();
        app.submit_login();

        assert_eq!(app.screen, Screen::Login);
        assert!(app.store.current_user().is_none());
        let status = app.status.as_ref().expect("status message expected");
        assert!(status.text.contains("Missing info"));
    }

    #[test]
    fn test_signup_creates_user_from_entered_name() {
        let mut app = seeded_app();
        app.screen = Screen::Signup;
        app.signup_form.name.set_value("Sana");
        app.signup_form.email.set_value("sana@uni.edu");
        app.signup_form.password.set_value("secret");
        app.submit_signup();

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.store.current_user().unwrap().name, "Sana");
    }

    #[test]
    fn test_signup_incomplete_stays_on_signup() {
        let mut app = seeded_app();
        app.screen = Screen::Signup;
        app.signup_form.name.set_value("Sana");
        app.submit_signup();

        assert_eq!(app.screen, Screen::Signup);
        assert!(app.store.current_user().is_none());
    }

    #[test]
    fn test_logout_returns_to_login_and_clears_user() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Profile);
        app.logout();

        assert_eq!(app.screen, Screen::Login);
        assert!(app.store.current_user().is_none());
        // Domain collections survive logout
        assert_eq!(app.store.offers().len(), 4);
    }

    #[test]
    fn test_open_and_close_offer_details() {
        let mut app = logged_in_app();
        app.home_index = 2;
        app.open_highlighted_offer();

        assert_eq!(app.screen, Screen::OfferDetails);
        assert_eq!(app.detail_offer().unwrap().title, "Poster Design in Figma");

        app.close_offer_details();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.selected_offer_id.is_none());
    }

    #[test]
    fn test_book_highlighted_slot_creates_confirmed_session() {
        let mut app = logged_in_app();
        app.open_offer_details("1".to_string());
        app.slot_index = 1;
        app.book_highlighted_slot();

        let sessions = app.store.sessions_for_current_user();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].start, "2025-09-28 11:00");
        assert_eq!(sessions[0].status, SessionStatus::Confirmed);
        assert!(app.status.as_ref().unwrap().text.contains("Booked"));
    }

    #[test]
    fn test_book_with_stale_offer_id_reports_not_found() {
        let mut app = logged_in_app();
        app.selected_offer_id = Some("stale".to_string());
        app.screen = Screen::OfferDetails;
        app.book_highlighted_slot();

        assert!(app.store.sessions_for_current_user().is_empty());
        assert_eq!(app.status.as_ref().unwrap().text, "Offer not found.");
    }

    #[test]
    fn test_submit_offer_success_resets_form() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Create);
        app.offer_form.title.set_value("SQL Crash Session");
        app.offer_form.description.set_value("Joins and indexes.");
        app.submit_offer();

        assert_eq!(app.store.offers().len(), 5);
        assert_eq!(app.store.offers()[0].owner, "You");
        assert!(app.offer_form.title.is_blank(), "form cleared after post");
        assert!(app.status.as_ref().unwrap().text.contains("live"));
    }

    #[test]
    fn test_submit_offer_validation_error_keeps_form() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Create);
        app.offer_form.title.set_value("Only a title");
        app.submit_offer();

        assert_eq!(app.store.offers().len(), 4);
        assert_eq!(app.offer_form.title.value(), "Only a title");
        assert!(app
            .status
            .as_ref()
            .unwrap()
            .text
            .contains("title and description"));
    }
}
