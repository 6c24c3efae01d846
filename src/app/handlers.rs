//! Keyboard handling.
//!
//! One entry point, [`App::handle_key`], dispatching on the active screen.
//! Tab/BackTab always move across the bottom tabs in the logged-in flow;
//! Up/Down move list selections or form focus; Enter confirms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen, Tab, CATEGORIES};

impl App {
    /// Handle a key press. Returns `true` when the event changed state.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global keybinds (always active)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Signup => self.handle_signup_key(key),
            Screen::Home => self.handle_home_key(key),
            Screen::OfferDetails => self.handle_details_key(key),
            Screen::CreateOffer => self.handle_create_key(key),
            Screen::Profile => self.handle_profile_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.login_form.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.login_form.focus_prev();
                true
            }
            KeyCode::Enter => {
                self.submit_login();
                true
            }
            // "New here? Create an account"
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.screen = Screen::Signup;
                true
            }
            KeyCode::Backspace => {
                self.login_form.focused_field_mut().backspace();
                true
            }
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.login_form.focused_field_mut().insert_char(c);
                true
            }
            _ => false,
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.signup_form.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.signup_form.focus_prev();
                true
            }
            KeyCode::Enter => {
                self.submit_signup();
                true
            }
            KeyCode::Esc => {
                self.screen = Screen::Login;
                true
            }
            KeyCode::Backspace => {
                self.signup_form.focused_field_mut().backspace();
                true
            }
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.signup_form.focused_field_mut().insert_char(c);
                true
            }
            _ => false,
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => {
                self.navigate_to_tab(self.tab.next());
                true
            }
            KeyCode::BackTab => {
                self.navigate_to_tab(self.tab.prev());
                true
            }
            KeyCode::Up => {
                if self.home_index > 0 {
                    self.home_index -= 1;
                }
                true
            }
            KeyCode::Down => {
                let len = self.filtered_offers().len();
                if len > 0 && self.home_index < len - 1 {
                    self.home_index += 1;
                }
                true
            }
            KeyCode::Left => {
                if self.category_index > 0 {
                    self.category_index -= 1;
                } else {
                    self.category_index = CATEGORIES.len() - 1;
                }
                self.home_index = 0;
                true
            }
            KeyCode::Right => {
                self.category_index = (self.category_index + 1) % CATEGORIES.len();
                self.home_index = 0;
                true
            }
            KeyCode::Enter => {
                self.open_highlighted_offer();
                true
            }
            KeyCode::Esc => {
                self.search.clear();
                self.clamp_home_index();
                true
            }
            KeyCode::Backspace => {
                self.search.backspace();
                self.clamp_home_index();
                true
            }
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.search.insert_char(c);
                self.clamp_home_index();
                true
            }
            _ => false,
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                if self.slot_index > 0 {
                    self.slot_index -= 1;
                }
                true
            }
            KeyCode::Down => {
                let slots = self.detail_offer().map(|o| o.slots.len()).unwrap_or(0);
                if slots > 0 && self.slot_index < slots - 1 {
                    self.slot_index += 1;
                }
                true
            }
            KeyCode::Enter => {
                self.book_highlighted_slot();
                true
            }
            KeyCode::Esc => {
                self.close_offer_details();
                true
            }
            _ => false,
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => {
                self.navigate_to_tab(self.tab.next());
                true
            }
            KeyCode::BackTab => {
                self.navigate_to_tab(self.tab.prev());
                true
            }
            KeyCode::Down => {
                self.offer_form.focus_next();
                true
            }
            KeyCode::Up => {
                self.offer_form.focus_prev();
                true
            }
            KeyCode::Enter => {
                self.submit_offer();
                true
            }
            KeyCode::Backspace => {
                self.offer_form.focused_field_mut().backspace();
                true
            }
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                self.offer_form.focused_field_mut().insert_char(c);
                true
            }
            _ => false,
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => {
                self.navigate_to_tab(self.tab.next());
                true
            }
            KeyCode::BackTab => {
                self.navigate_to_tab(self.tab.prev());
                true
            }
            KeyCode::Char('l') => {
                self.logout();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DomainStore;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn logged_in_app() -> App {
        let mut app = App::new(DomainStore::with_seed_offers());
        app.submit_login();
        app
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = App::new(DomainStore::with_seed_offers());
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);

        let mut app = logged_in_app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_on_prefilled_login_reaches_home() {
        let mut app = App::new(DomainStore::with_seed_offers());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_login_typing_goes_to_focused_field() {
        let mut app = App::new(DomainStore::with_seed_offers());
        app.login_form.email.clear();
        type_str(&mut app, "me@uni.edu");
        assert_eq!(app.login_form.email.value(), "me@uni.edu");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.login_form.password.value(), "1234");
    }

    #[test]
    fn test_ctrl_n_opens_signup_and_esc_returns() {
        let mut app = App::new(DomainStore::with_seed_offers());
        app.handle_key(ctrl('n'));
        assert_eq!(app.screen, Screen::Signup);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn test_home_typing_filters_list() {
        let mut app = logged_in_app();
        type_str(&mut app, "figma");
        assert_eq!(app.filtered_offers().len(), 1);
        assert_eq!(app.search.value(), "figma");

        app.handle_key(key(KeyCode::Esc));
        assert!(app.search.is_blank());
        assert_eq!(app.filtered_offers().len(), 4);
    }

    #[test]
    fn test_home_category_cycling_resets_selection() {
        let mut app = logged_in_app();
        app.home_index = 3;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.current_category(), "CS");
        assert_eq!(app.home_index, 0);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.current_category(), "All");

        // Left from "All" wraps to the last tag
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.current_category(), "Music");
    }

    #[test]
    fn test_home_list_navigation_clamps_at_ends() {
        let mut app = logged_in_app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.home_index, 0);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.home_index, 3);
    }

    #[test]
    fn test_enter_opens_details_and_enter_books() {
        let mut app = logged_in_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::OfferDetails);
        assert_eq!(app.detail_offer().unwrap().id, "1");

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        let sessions = app.store.sessions_for_current_user();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].start, "2025-09-28 11:00");
    }

    #[test]
    fn test_details_esc_returns_home() {
        let mut app = logged_in_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_slot_navigation_clamps() {
        let mut app = logged_in_app();
        app.open_offer_details("4".to_string()); // Guitar Basics, one slot
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.slot_index, 0);
    }

    #[test]
    fn test_tab_cycles_bottom_tabs() {
        let mut app = logged_in_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::CreateOffer);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Profile);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Home);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.screen, Screen::Profile);
    }

    #[test]
    fn test_create_flow_through_keys() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Create);

        type_str(&mut app, "SQL Crash Session");
        app.handle_key(key(KeyCode::Down)); // category
        app.handle_key(key(KeyCode::Down)); // duration
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        type_str(&mut app, "45");
        app.handle_key(key(KeyCode::Down)); // description
        type_str(&mut app, "Joins and indexes.");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.store.offers().len(), 5);
        let offer = &app.store.offers()[0];
        assert_eq!(offer.title, "SQL Crash Session");
        assert_eq!(offer.duration_mins, 45);
    }

    #[test]
    fn test_create_submit_without_description_is_rejected() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Create);
        type_str(&mut app, "Only a title");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.store.offers().len(), 4);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_profile_logout_key() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Profile);
        app.handle_key(key(KeyCode::Char('l')));

        assert_eq!(app.screen, Screen::Login);
        assert!(app.store.current_user().is_none());
    }

    #[test]
    fn test_unhandled_key_reports_no_change() {
        let mut app = logged_in_app();
        app.navigate_to_tab(Tab::Profile);
        assert!(!app.handle_key(key(KeyCode::Home)));
    }
}
