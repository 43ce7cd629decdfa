//! Event Entity

use chrono::{DateTime, Utc};
use kernel::id::EventId;

/// A schedulable activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}

/// Fields for a new event row
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}

/// Partial update; `None` leaves the column as it is
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

impl EventChanges {
    pub fn apply(self, event: &mut Event) {
        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(capacity) = self.capacity {
            event.capacity = capacity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event() -> Event {
        Event {
            id: EventId::new(1),
            name: "RustConf".to_string(),
            description: None,
            date: Utc.with_ymd_and_hms(2030, 5, 1, 9, 0, 0).unwrap(),
            location: "Hall A".to_string(),
            capacity: 100,
        }
    }

    #[test]
    fn test_changes_only_touch_given_fields() {
        let mut event = event();
        EventChanges {
            capacity: Some(50),
            description: Some("Talks".to_string()),
            ..Default::default()
        }
        .apply(&mut event);

        assert_eq!(event.capacity, 50);
        assert_eq!(event.description.as_deref(), Some("Talks"));
        assert_eq!(event.name, "RustConf");
        assert_eq!(event.location, "Hall A");
    }
}
