use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator as _;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub event_start: Option<NaiveDateTime>,
    pub event_end: Option<NaiveDateTime>,
    pub status_id: i32,
}

impl Event {
    /// `None` when the stored code is outside the known set.
    pub fn status(&self) -> Option<EventStatus> {
        EventStatus::from_id(self.status_id)
    }

    pub fn is_visible(&self) -> bool {
        self.status().is_some_and(EventStatus::is_visible)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum EventStatus {
    NotOpen = 1,
    Ongoing = 2,
    Ended = 3,
    OpenForTicket = 4,
    Cancelled = 5,
}

impl EventStatus {
    pub const VISIBLE: [EventStatus; 3] = [
        EventStatus::NotOpen,
        EventStatus::Ongoing,
        EventStatus::OpenForTicket,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Self> {
        EventStatus::iter().find(|status| status.id() == id)
    }

    pub fn is_visible(self) -> bool {
        Self::VISIBLE.contains(&self)
    }

    pub fn visible_ids() -> Vec<i32> {
        Self::VISIBLE.iter().map(|status| status.id()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_visible_statuses() {
        // Arrange
        let statuses: Vec<_> = EventStatus::iter().collect();

        // Act
        let visible: Vec<_> =
            statuses.into_iter().filter(|s| s.is_visible()).collect();

        // Assert
        assert_eq!(
            visible,
            vec![
                EventStatus::NotOpen,
                EventStatus::Ongoing,
                EventStatus::OpenForTicket
            ]
        );
        assert_eq!(EventStatus::visible_ids(), vec![1, 2, 4]);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(EventStatus::from_id(3), Some(EventStatus::Ended));
        assert_eq!(EventStatus::from_id(5), Some(EventStatus::Cancelled));
        assert_eq!(EventStatus::from_id(0), None);
        assert_eq!(EventStatus::from_id(6), None);
    }

    #[test]
    fn test_unknown_status_is_not_visible() {
        // Arrange
        let event = Event {
            id: 1,
            status_id: 42,
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(event.status(), None);
        assert!(!event.is_visible());
    }
}
