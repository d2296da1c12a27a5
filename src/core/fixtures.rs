//! Canned payloads served by the read endpoints.
//!
//! Timestamps are offsets from `now` so the data always looks recent.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Conversation, Location, Match, MatchedUser, Message, MessagePreview, Profile, ProfileCard,
    UpdateProfileRequest, User,
};

pub const CURRENT_USER_ID: &str = "user_123";

pub fn current_user() -> User {
    User {
        id: CURRENT_USER_ID.to_string(),
        phone: "+84912345678".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: Some("john.doe@example.com".to_string()),
        verified: true,
        created_at: None,
    }
}

/// Profile literal served for any user id
pub fn profile(user_id: &str) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        first_name: "Emma".to_string(),
        last_name: "Nguyen".to_string(),
        age: 26,
        gender: "female".to_string(),
        bio: "Coffee lover, weekend hiker, always planning the next trip.".to_string(),
        photos: vec![
            photo_url(user_id, 1),
            photo_url(user_id, 2),
        ],
        interests: strings(&["travel", "hiking", "coffee", "photography"]),
        location: Location {
            city: "Ho Chi Minh City".to_string(),
            country: "Vietnam".to_string(),
        },
        verified: true,
    }
}

/// Profile of the signed-in user before any update is applied
pub fn current_profile() -> Profile {
    let user = current_user();
    Profile {
        user_id: user.id.clone(),
        first_name: user.first_name,
        last_name: user.last_name,
        age: 28,
        gender: "male".to_string(),
        bio: "Software engineer who cooks better than he codes.".to_string(),
        photos: vec![photo_url(&user.id, 1)],
        interests: strings(&["cooking", "running", "music"]),
        location: Location {
            city: "Hanoi".to_string(),
            country: "Vietnam".to_string(),
        },
        verified: user.verified,
    }
}

/// Write every provided field of `update` over `profile`
pub fn apply_update(mut profile: Profile, update: UpdateProfileRequest) -> Profile {
    if let Some(first_name) = update.first_name {
        profile.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        profile.last_name = last_name;
    }
    if let Some(age) = update.age {
        profile.age = age;
    }
    if let Some(gender) = update.gender {
        profile.gender = gender;
    }
    if let Some(bio) = update.bio {
        profile.bio = bio;
    }
    if let Some(photos) = update.photos {
        profile.photos = photos;
    }
    if let Some(interests) = update.interests {
        profile.interests = interests;
    }
    if let Some(location) = update.location {
        profile.location = location;
    }
    profile
}

pub fn discovery_deck() -> Vec<ProfileCard> {
    vec![
        ProfileCard {
            user_id: "user_456".to_string(),
            first_name: "Linh".to_string(),
            age: 25,
            bio: "Yoga in the morning, street food at night.".to_string(),
            photos: vec![photo_url("user_456", 1), photo_url("user_456", 2)],
            interests: strings(&["yoga", "food", "travel"]),
            distance_km: 2.4,
            verified: true,
        },
        ProfileCard {
            user_id: "user_789".to_string(),
            first_name: "Sophie".to_string(),
            age: 27,
            bio: "Bookworm and amateur photographer.".to_string(),
            photos: vec![photo_url("user_789", 1)],
            interests: strings(&["books", "photography", "art"]),
            distance_km: 5.1,
            verified: false,
        },
        ProfileCard {
            user_id: "user_321".to_string(),
            first_name: "Mai".to_string(),
            age: 24,
            bio: "Looking for someone to share bubble tea with.".to_string(),
            photos: vec![photo_url("user_321", 1), photo_url("user_321", 2)],
            interests: strings(&["music", "dancing", "movies"]),
            distance_km: 8.7,
            verified: true,
        },
    ]
}

pub fn matches(now: DateTime<Utc>) -> Vec<Match> {
    vec![
        Match {
            id: "match_001".to_string(),
            user: matched_user("user_456", "Linh"),
            matched_at: now - Duration::days(2),
        },
        Match {
            id: "match_002".to_string(),
            user: matched_user("user_321", "Mai"),
            matched_at: now - Duration::hours(5),
        },
    ]
}

pub fn conversations(now: DateTime<Utc>) -> Vec<Conversation> {
    vec![
        Conversation {
            id: "conv_001".to_string(),
            match_id: "match_001".to_string(),
            participant: matched_user("user_456", "Linh"),
            last_message: MessagePreview {
                text: "See you at the café on Saturday!".to_string(),
                sent_at: now - Duration::minutes(30),
            },
            unread_count: 1,
        },
        Conversation {
            id: "conv_002".to_string(),
            match_id: "match_002".to_string(),
            participant: matched_user("user_321", "Mai"),
            last_message: MessagePreview {
                text: "Haha, that's so true".to_string(),
                sent_at: now - Duration::hours(3),
            },
            unread_count: 0,
        },
    ]
}

/// Three-message exchange, oldest first, tagged with `conversation_id`
pub fn thread(conversation_id: &str, now: DateTime<Utc>) -> Vec<Message> {
    let lines = [
        ("msg_001", "user_456", "Hi John! Loved your cooking photos.", 50, true),
        ("msg_002", CURRENT_USER_ID, "Thanks! Do you like Vietnamese food?", 40, true),
        ("msg_003", "user_456", "See you at the café on Saturday!", 30, false),
    ];

    lines
        .iter()
        .map(|&(id, sender, text, minutes_ago, read)| Message {
            id: id.to_string(),
            conversation_id: conversation_id.to_string(),
            sender_id: sender.to_string(),
            text: text.to_string(),
            sent_at: now - Duration::minutes(minutes_ago),
            read,
        })
        .collect()
}

fn matched_user(user_id: &str, first_name: &str) -> MatchedUser {
    MatchedUser {
        user_id: user_id.to_string(),
        first_name: first_name.to_string(),
        photo: photo_url(user_id, 1),
    }
}

fn photo_url(user_id: &str, n: u8) -> String {
    format!("https://cdn.lume.app/photos/{}/{}.jpg", user_id, n)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
