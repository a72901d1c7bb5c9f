use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use rusqlite::Connection;

use super::BookingStore;
use crate::db::queries;
use crate::models::{Booking, BookingStatus, NewBooking};

pub struct SqliteBookingStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteBookingStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> anyhow::Result<T>) -> anyhow::Result<T> {
        let conn = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("database connection lock poisoned"))?;
        f(&conn)
    }
}

#[async_trait]
impl BookingStore for SqliteBookingStore {
    async fn insert(&self, booking: NewBooking) -> anyhow::Result<Booking> {
        // Truncated to the precision the bookings table stores.
        let now = Utc::now().trunc_subsecs(6);
        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            name: booking.name,
            vehicle: booking.vehicle,
            service: booking.service,
            status: booking.status,
            date: booking.date.trunc_subsecs(6),
            created_at: now,
            updated_at: now,
        };

        self.with_conn(|conn| queries::create_booking(conn, &booking))?;
        Ok(booking)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Booking>> {
        self.with_conn(queries::get_all_bookings)
    }

    async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> anyhow::Result<Option<Booking>> {
        let now = Utc::now().trunc_subsecs(6);
        self.with_conn(|conn| {
            if !queries::update_booking_status(conn, id, status, &now)? {
                return Ok(None);
            }
            queries::get_booking_by_id(conn, id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::ServiceType;

    fn setup_store() -> SqliteBookingStore {
        SqliteBookingStore::new(db::init_db(":memory:").unwrap())
    }

    fn new_booking(name: &str) -> NewBooking {
        NewBooking {
            name: name.to_string(),
            vehicle: "KA-01-1234".to_string(),
            service: ServiceType::GeneralInspection,
            status: BookingStatus::Pending,
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_identity_and_timestamps() {
        let store = setup_store();
        let booking = store.insert(new_booking("Alice")).await.unwrap();

        assert!(!booking.id.is_empty());
        assert_eq!(booking.created_at, booking.updated_at);

        let all = store.find_all().await.unwrap();
        assert_eq!(all, vec![booking]);
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let store = setup_store();
        let first = store.insert(new_booking("First")).await.unwrap();
        let second = store.insert(new_booking("Second")).await.unwrap();
        let third = store.insert(new_booking("Third")).await.unwrap();

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec![third.name, second.name, first.name]);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let store = setup_store();
        let result = store
            .update_status("missing", BookingStatus::Completed)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_status_touches_only_status_and_updated_at() {
        let store = setup_store();
        let original = store.insert(new_booking("Alice")).await.unwrap();

        let updated = store
            .update_status(&original.id, BookingStatus::InProgress)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, BookingStatus::InProgress);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.vehicle, original.vehicle);
        assert_eq!(updated.service, original.service);
        assert_eq!(updated.date, original.date);
        assert_eq!(updated.created_at, original.created_at);
    }
}
