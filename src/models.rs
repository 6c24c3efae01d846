use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A teachable-skill listing posted to the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Unique identifier, opaque string (time-derived token)
    pub id: String,
    /// Listing title shown in the browse list
    pub title: String,
    /// Display name of the user who posted the offer
    pub owner: String,
    /// Rating between 0.0 and 5.0
    pub rating: f64,
    /// Free-form category label ("CS", "Design", ...)
    pub category: String,
    /// Session length in minutes
    pub duration_mins: u32,
    /// Avatar URI of the owner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Description text shown on the details screen
    pub description: String,
    /// Available time slots, opaque timestamp-like strings
    #[serde(default)]
    pub slots: Vec<String>,
}

/// Status of a booked session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl SessionStatus {
    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Confirmed => "Confirmed",
            SessionStatus::Cancelled => "Cancelled",
            SessionStatus::Completed => "Completed",
        }
    }
}

/// A booking of the current user against one of an offer's slots.
///
/// Tutor name and duration are denormalized copies taken from the offer at
/// booking time; later changes to the offer do not affect existing sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Identifier of the booked offer (reference, not ownership)
    pub offer_id: String,
    /// Tutor display name, copied from the offer
    pub tutor: String,
    /// Start timestamp string as shown on the offer's slot
    pub start: String,
    /// Session length in minutes, copied from the offer
    pub duration_mins: u32,
    /// Booking status; only `Confirmed` is produced by the store
    pub status: SessionStatus,
    /// When the booking was made
    #[serde(default = "Utc::now")]
    pub booked_at: DateTime<Utc>,
}

/// The single logged-in identity. Absence of a value signals the
/// unauthenticated flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub bio: String,
    /// Self-described skills, if the user listed any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl User {
    /// The demo identity produced by the login screen.
    pub fn demo(email: impl Into<String>) -> Self {
        Self {
            name: "You".to_string(),
            email: email.into(),
            avatar: Some("https://i.pravatar.cc/100?img=68".to_string()),
            bio: "Student who loves building apps.".to_string(),
            skills: Some(vec![
                "React Native".to_string(),
                "Photography".to_string(),
            ]),
        }
    }

    /// Identity produced by the signup screen from the entered name/email.
    pub fn signed_up(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: Some("https://i.pravatar.cc/100?img=16".to_string()),
            bio: "Excited to learn and teach.".to_string(),
            skills: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_serialization_round_trip() {
        let offer = Offer {
            id: "42".to_string(),
            title: "SQL Crash Session".to_string(),
            owner: "You".to_string(),
            rating: 5.0,
            category: "CS".to_string(),
            duration_mins: 60,
            avatar: None,
            description: "Joins, indexes, and query plans.".to_string(),
            slots: vec!["2025-10-01 10:00".to_string()],
        };

        let json = serde_json::to_string(&offer).expect("Failed to serialize");
        let deserialized: Offer = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(offer, deserialized);
    }

    #[test]
    fn test_offer_deserialization_without_slots() {
        let json = r#"{
            "id": "7",
            "title": "Guitar Basics",
            "owner": "Usman",
            "rating": 4.6,
            "category": "Music",
            "duration_mins": 40,
            "description": "Chords and strumming."
        }"#;

        let offer: Offer = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(offer.slots.is_empty());
        assert!(offer.avatar.is_none());
    }

    #[test]
    fn test_session_status_labels() {
        assert_eq!(SessionStatus::Confirmed.label(), "Confirmed");
        assert_eq!(SessionStatus::Cancelled.label(), "Cancelled");
        assert_eq!(SessionStatus::Completed.label(), "Completed");
    }

    #[test]
    fn test_session_status_serializes_lowercase() {
        let json = serde_json::to_string(&SessionStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }

    #[test]
    fn test_session_serialization_round_trip() {
        let session = Session {
            offer_id: "1".to_string(),
            tutor: "Aisha".to_string(),
            start: "2025-09-27 15:00".to_string(),
            duration_mins: 60,
            status: SessionStatus::Confirmed,
            booked_at: Utc::now(),
        };

        let json = serde_json::to_string(&session).expect("Failed to serialize");
        let deserialized: Session = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(session, deserialized);
    }

    #[test]
    fn test_demo_user_fields() {
        let user = User::demo("test@student.com");
        assert_eq!(user.name, "You");
        assert_eq!(user.email, "test@student.com");
        assert!(user.avatar.is_some());
        assert_eq!(
            user.skills,
            Some(vec!["React Native".to_string(), "Photography".to_string()])
        );
    }

    #[test]
    fn test_signed_up_user_has_no_skills() {
        let user = User::signed_up("Sana", "sana@uni.edu");
        assert_eq!(user.name, "Sana");
        assert_eq!(user.email, "sana@uni.edu");
        assert!(user.skills.is_none());
        assert_eq!(user.bio, "Excited to learn and teach.");
    }
}
