//! UI rendering for the SkillSwap TUI
//!
//! Implements the six-screen terminal interface:
//! - Auth: sign-in and create-account dialogs with the logo header
//! - Home: search box, category tags, and the offer list
//! - Offer details: description plus the slot picker
//! - Create offer: the post-an-offer form
//! - Profile: account details, posted offers, and booked sessions
//!
//! All render functions take the immutable [`App`](crate::app::App) and
//! build a [`LayoutContext`] from the frame area for responsive sizing.

mod components;
mod create_offer;
mod helpers;
mod home;
mod layout;
mod login;
mod offer_details;
mod profile;
mod signup;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INPUT_BG,
    COLOR_RATING, COLOR_SUCCESS, COLOR_TAG_SELECTED,
};

// Re-export layout system for external use
pub use layout::LayoutContext;

use ratatui::Frame;

use crate::app::{App, Screen};
use create_offer::render_create_offer_screen;
use home::render_home_screen;
use login::render_login_screen;
use offer_details::render_offer_details_screen;
use profile::render_profile_screen;
use signup::render_signup_screen;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => render_login_screen(frame, app),
        Screen::Signup => render_signup_screen(frame, app),
        Screen::Home => render_home_screen(frame, app),
        Screen::OfferDetails => render_offer_details_screen(frame, app),
        Screen::CreateOffer => render_create_offer_screen(frame, app),
        Screen::Profile => render_profile_screen(frame, app),
    }
}
