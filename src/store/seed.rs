//! Starting offer collection for a fresh marketplace.

use crate::models::Offer;

/// The four example offers the application starts with.
///
/// Returned most-recent-first, matching the store's ordering invariant.
/// Tests rely on these exact field values.
pub fn seed_offers() -> Vec<Offer> {
    vec![
        Offer {
            id: "1".to_string(),
            title: "Data Structures Tutoring".to_string(),
            owner: "Aisha".to_string(),
            rating: 4.9,
            category: "CS".to_string(),
            duration_mins: 60,
            avatar: Some("https://i.pravatar.cc/100?img=5".to_string()),
            description: "One-hour crash help with trees, graphs, Big-O, and practice questions."
                .to_string(),
            slots: vec![
                "2025-09-27 15:00".to_string(),
                "2025-09-28 11:00".to_string(),
            ],
        },
        Offer {
            id: "2".to_string(),
            title: "Public Speaking Coaching".to_string(),
            owner: "Bilal".to_string(),
            rating: 4.8,
            category: "Soft Skills".to_string(),
            duration_mins: 45,
            avatar: Some("https://i.pravatar.cc/100?img=12".to_string()),
            description: "Structure a speech, control nerves, and get live feedback.".to_string(),
            slots: vec![
                "2025-09-27 18:00".to_string(),
                "2025-09-29 14:30".to_string(),
            ],
        },
        Offer {
            id: "3".to_string(),
            title: "Poster Design in Figma".to_string(),
            owner: "Hira".to_string(),
            rating: 4.7,
            category: "Design".to_string(),
            duration_mins: 50,
            avatar: Some("https://i.pravatar.cc/100?img=31".to_string()),
            description: "Make crisp posters for club events. Learn layout, color, and export."
                .to_string(),
            slots: vec![
                "2025-09-28 10:00".to_string(),
                "2025-09-30 16:00".to_string(),
            ],
        },
        Offer {
            id: "4".to_string(),
            title: "Guitar Basics".to_string(),
            owner: "Usman".to_string(),
            rating: 4.6,
            category: "Music".to_string(),
            duration_mins: 40,
            avatar: Some("https://i.pravatar.cc/100?img=47".to_string()),
            description: "Chords, strumming, and a simple song in one session.".to_string(),
            slots: vec!["2025-09-27 19:30".to_string()],
        },
    ]
}
