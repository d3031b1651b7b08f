//! Event subscriptions.
//!
//! Capacity is enforced: when `max_participants` is set, a subscription that
//! would exceed it is rejected. A participant can hold at most one spot.

use crate::error::{ParishError, Result};
use crate::model::{Event, RecordId};

impl Event {
    pub fn is_subscribed(&self, participant: RecordId) -> bool {
        self.participants.contains(&participant)
    }

    /// Remaining spots, or `None` when the event has no capacity limit.
    pub fn spots_left(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.participants.len() as u32))
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == Some(0)
    }

    pub fn subscribe(&mut self, participant: RecordId) -> Result<()> {
        if self.is_subscribed(participant) {
            return Err(ParishError::AlreadySubscribed {
                event: self.id,
                participant,
            });
        }
        if let Some(capacity) = self.max_participants {
            if self.is_full() {
                return Err(ParishError::EventFull {
                    event: self.id,
                    capacity,
                });
            }
        }
        self.participants.push(participant);
        Ok(())
    }

    pub fn unsubscribe(&mut self, participant: RecordId) -> Result<()> {
        if !self.is_subscribed(participant) {
            return Err(ParishError::NotSubscribed {
                event: self.id,
                participant,
            });
        }
        self.participants.retain(|p| *p != participant);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventCategory;
    use chrono::Utc;

    fn event(max: Option<u32>) -> Event {
        Event {
            id: 7,
            title: "Missa de Páscoa".into(),
            description: String::new(),
            date: Utc::now(),
            location: "Igreja Matriz".into(),
            category: EventCategory::Liturgical,
            organizer: "Pe. José".into(),
            participants: vec![],
            max_participants: max,
            image: None,
        }
    }

    #[test]
    fn subscribe_until_full() {
        let mut ev = event(Some(2));
        ev.subscribe(1).unwrap();
        ev.subscribe(2).unwrap();
        assert!(ev.is_full());

        let err = ev.subscribe(3).unwrap_err();
        assert!(matches!(
            err,
            ParishError::EventFull {
                event: 7,
                capacity: 2
            }
        ));
        assert_eq!(ev.participants, vec![1, 2]);
    }

    #[test]
    fn rejects_duplicate_participant() {
        let mut ev = event(None);
        ev.subscribe(1).unwrap();
        assert!(matches!(
            ev.subscribe(1),
            Err(ParishError::AlreadySubscribed { participant: 1, .. })
        ));
        assert_eq!(ev.participants.len(), 1);
    }

    #[test]
    fn unlimited_events_have_no_spot_count() {
        let mut ev = event(None);
        for p in 0..100 {
            ev.subscribe(p).unwrap();
        }
        assert_eq!(ev.spots_left(), None);
        assert!(!ev.is_full());
    }

    #[test]
    fn unsubscribe_frees_a_spot() {
        let mut ev = event(Some(1));
        ev.subscribe(5).unwrap();
        assert_eq!(ev.spots_left(), Some(0));

        ev.unsubscribe(5).unwrap();
        assert_eq!(ev.spots_left(), Some(1));
        assert!(matches!(
            ev.unsubscribe(5),
            Err(ParishError::NotSubscribed { participant: 5, .. })
        ));
    }

    #[test]
    fn unsubscribe_drops_repeated_entries() {
        let mut ev = event(Some(5));
        ev.participants = vec![3, 8, 3];

        ev.unsubscribe(3).unwrap();

        assert!(!ev.is_subscribed(3));
        assert_eq!(ev.participants, vec![8]);
        assert_eq!(ev.spots_left(), Some(4));
    }

    #[test]
    fn overbooked_seed_reports_zero_spots() {
        let mut ev = event(Some(1));
        ev.participants = vec![1, 2, 3];
        assert_eq!(ev.spots_left(), Some(0));
        assert!(ev.subscribe(4).is_err());
    }
}
