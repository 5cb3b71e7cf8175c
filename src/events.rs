//! Event listing data and category filtering.
//!
//! The listing is a fixed in-crate table; display text comes from the locale
//! bundles via the key fields, so the same table serves every language.

use chrono::NaiveDate;

/// Categories used to filter the events listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Worship,
    Conference,
    Community,
    Youth,
    Special,
}

impl EventCategory {
    /// Every category, in the order the filter bar lists them.
    pub fn all() -> [EventCategory; 5] {
        [
            Self::Worship,
            Self::Conference,
            Self::Community,
            Self::Youth,
            Self::Special,
        ]
    }

    /// Parse a filter query value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "worship" => Some(Self::Worship),
            "conference" => Some(Self::Conference),
            "community" => Some(Self::Community),
            "youth" => Some(Self::Youth),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    /// The query value used in filter links.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Worship => "worship",
            Self::Conference => "conference",
            Self::Community => "community",
            Self::Youth => "youth",
            Self::Special => "special",
        }
    }

    /// Bundle key for the localized category label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Worship => "events.categories.worship",
            Self::Conference => "events.categories.conference",
            Self::Community => "events.categories.community",
            Self::Youth => "events.categories.youth",
            Self::Special => "events.categories.special",
        }
    }
}

/// One entry in the upcoming events listing.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: u32,
    pub category: EventCategory,
    pub date: NaiveDate,
    pub time: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub location_key: &'static str,
    pub featured: bool,
}

/// The upcoming events listing.
pub fn upcoming() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            category: EventCategory::Worship,
            date: date(2025, 2, 15),
            time: "10:00",
            title_key: "events.upcoming.event1.title",
            description_key: "events.upcoming.event1.description",
            location_key: "events.upcoming.event1.location",
            featured: true,
        },
        Event {
            id: 2,
            category: EventCategory::Conference,
            date: date(2025, 3, 1),
            time: "18:00",
            title_key: "events.upcoming.event2.title",
            description_key: "events.upcoming.event2.description",
            location_key: "events.upcoming.event2.location",
            featured: true,
        },
        Event {
            id: 3,
            category: EventCategory::Youth,
            date: date(2025, 2, 28),
            time: "19:30",
            title_key: "events.upcoming.event3.title",
            description_key: "events.upcoming.event3.description",
            location_key: "events.upcoming.event3.location",
            featured: false,
        },
        Event {
            id: 4,
            category: EventCategory::Community,
            date: date(2025, 3, 15),
            time: "14:00",
            title_key: "events.upcoming.event4.title",
            description_key: "events.upcoming.event4.description",
            location_key: "events.upcoming.event4.location",
            featured: false,
        },
    ]
}

/// Filter the listing by category; `None` keeps every event.
pub fn filter_by_category(events: &[Event], category: Option<EventCategory>) -> Vec<Event> {
    events
        .iter()
        .filter(|event| category.map_or(true, |wanted| event.category == wanted))
        .cloned()
        .collect()
}

/// The events highlighted at the top of the page.
pub fn featured(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|event| event.featured).cloned().collect()
}

/// Format an event date the way the site displays it (e.g. "15 February 2025").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
