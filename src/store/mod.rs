//! In-memory domain store for the marketplace.
//!
//! [`DomainStore`] owns the three collections (offers, sessions, current
//! user) and is the only sanctioned way to read or mutate them. Screens are
//! pure consumers. State lives for the process lifetime; there is no
//! persistence and no concurrency (one interactive session, accessed
//! sequentially), so the store is a plain value constructed once and owned
//! by the application.

mod seed;

pub use seed::seed_offers;

use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::models::{Offer, Session, SessionStatus, User};

/// Category sentinel that matches every offer in [`DomainStore::search_offers`].
pub const CATEGORY_ALL: &str = "All";

/// Fallback display name when an offer is created with no logged-in user.
const FALLBACK_OWNER: &str = "You";

/// Default session length when the duration field is absent or unparseable.
const DEFAULT_DURATION_MINS: u32 = 60;

/// Caller-supplied fields for [`DomainStore::create_offer`].
///
/// Identifier, rating, owner, and slot list are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewOffer {
    /// Listing title; required, trimmed before validation
    pub title: String,
    /// Description text; required
    pub description: String,
    /// Category label as entered on the create screen
    pub category: String,
    /// Raw duration input; parsed as a positive integer, default 60
    pub duration: String,
}

/// The in-memory domain store.
#[derive(Debug, Default)]
pub struct DomainStore {
    /// Offer collection, most-recently-created first
    offers: Vec<Offer>,
    /// Booked sessions, most recent first
    sessions: Vec<Session>,
    /// The single logged-in identity, if any
    current_user: Option<User>,
}

impl DomainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the starting offer collection.
    pub fn with_seed_offers() -> Self {
        Self {
            offers: seed_offers(),
            sessions: Vec::new(),
            current_user: None,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All offers in current order (most-recently-created first).
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Look up an offer by identifier. Absence is a normal outcome.
    pub fn find_offer(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Filter offers by search text and category.
    ///
    /// The query matches case-insensitively against title or owner name
    /// (empty query matches everything); the category must match exactly
    /// unless it is the [`CATEGORY_ALL`] sentinel. Both predicates must
    /// hold. Order is preserved from the underlying collection.
    pub fn search_offers(&self, query: &str, category: &str) -> Vec<&Offer> {
        let needle = query.to_lowercase();
        self.offers
            .iter()
            .filter(|o| {
                let matches_query = needle.is_empty()
                    || o.title.to_lowercase().contains(&needle)
                    || o.owner.to_lowercase().contains(&needle);
                let matches_category = category == CATEGORY_ALL || o.category == category;
                matches_query && matches_category
            })
            .collect()
    }

    /// Offers posted by the given owner name (exact match).
    pub fn offers_by_owner(&self, name: &str) -> Vec<&Offer> {
        self.offers.iter().filter(|o| o.owner == name).collect()
    }

    /// Sessions booked by the current user, most recent first.
    ///
    /// The session collection already holds only the current user's bookings
    /// (single-user process model), so this lists all sessions. A multi-user
    /// rebuild would filter by actor here.
    pub fn sessions_for_current_user(&self) -> &[Session] {
        &self.sessions
    }

    /// The active identity, or `None` when unauthenticated.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a new offer and prepend it to the collection.
    ///
    /// Title (after trimming) and description are required; an empty value
    /// returns [`StoreError::Validation`] and leaves the collection
    /// untouched. Duration defaults to 60 minutes when the input does not
    /// parse as a positive integer. Owner name and avatar are taken from the
    /// current user when present.
    pub fn create_offer(&mut self, fields: NewOffer) -> StoreResult<&Offer> {
        let title = fields.title.trim();
        if title.is_empty() || fields.description.is_empty() {
            return Err(StoreError::validation(
                "Please add a title and description",
            ));
        }

        let duration_mins = fields
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0)
            .unwrap_or(DEFAULT_DURATION_MINS);

        let (owner, avatar) = match &self.current_user {
            Some(user) => (user.name.clone(), user.avatar.clone()),
            None => (FALLBACK_OWNER.to_string(), None),
        };

        let offer = Offer {
            id: self.fresh_offer_id(),
            title: title.to_string(),
            owner,
            rating: 5.0,
            category: fields.category,
            duration_mins,
            avatar,
            description: fields.description,
            slots: Vec::new(),
        };

        tracing::info!(id = %offer.id, title = %offer.title, "offer created");
        self.offers.insert(0, offer);
        Ok(&self.offers[0])
    }

    /// Book a slot against an offer and prepend the resulting session.
    ///
    /// The offer id must resolve, otherwise [`StoreError::NotFound`] is
    /// returned and no session is created. The slot string itself is not
    /// validated against the offer's slot list; tutor name and duration are
    /// denormalized from the offer at call time. Duplicate bookings of the
    /// same slot are permitted.
    pub fn book_session(&mut self, offer_id: &str, slot: &str) -> StoreResult<&Session> {
        let offer = self
            .find_offer(offer_id)
            .ok_or_else(|| StoreError::not_found(offer_id))?;

        let session = Session {
            offer_id: offer.id.clone(),
            tutor: offer.owner.clone(),
            start: slot.to_string(),
            duration_mins: offer.duration_mins,
            status: SessionStatus::Confirmed,
            booked_at: Utc::now(),
        };

        tracing::info!(offer_id = %session.offer_id, start = %session.start, "session booked");
        self.sessions.insert(0, session);
        Ok(&self.sessions[0])
    }

    /// Set or clear the active identity.
    ///
    /// Has no effect on the offer or session collections.
    pub fn set_current_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => tracing::info!(name = %u.name, "user signed in"),
            None => tracing::info!("user signed out"),
        }
        self.current_user = user;
    }

    /// Fresh identifier unique among existing offers.
    ///
    /// Derived from the current time in milliseconds, bumped past any
    /// collision (two creations can land on the same millisecond).
    fn fresh_offer_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(0) as u64;
        while self.offers.iter().any(|o| o.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
