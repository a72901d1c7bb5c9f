pub mod sqlite;

use async_trait::async_trait;

use crate::models::{Booking, BookingStatus, NewBooking};

/// Durable storage for bookings. Implementations assign identities and
/// maintain `created_at`/`updated_at`; each call touches at most one record
/// atomically.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert(&self, booking: NewBooking) -> anyhow::Result<Booking>;

    /// Every booking, most recently created first.
    async fn find_all(&self) -> anyhow::Result<Vec<Booking>>;

    /// Sets the status of one booking. `Ok(None)` when no booking has `id`.
    async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> anyhow::Result<Option<Booking>>;
}
