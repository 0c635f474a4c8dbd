//! Collaborator seams. Implementations must report backend failures as
//! [`CatalogError::StoreUnavailable`](crate::CatalogError::StoreUnavailable)
//! and absent rows as `None`.

use async_trait::async_trait;
use chrono::NaiveDate;
use entity::prelude::*;

use crate::CatalogResult;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_by_status_in(
        &self,
        status_ids: &[i32],
    ) -> CatalogResult<Vec<EventEntity>>;

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<EventEntity>>;
}

#[async_trait]
pub trait CoverImageStore: Send + Sync {
    /// Newest first.
    async fn find_all_order_by_created_at_desc(
        &self,
    ) -> CatalogResult<Vec<CoverImageEntity>>;

    async fn find_most_recent_by_event_id(
        &self,
        event_id: i64,
    ) -> CatalogResult<Option<CoverImageEntity>>;
}

#[async_trait]
pub trait EventIntroStore: Send + Sync {
    async fn find_by_event_id(
        &self,
        event_id: i64,
    ) -> CatalogResult<Option<EventIntroEntity>>;
}

#[async_trait]
pub trait EventStatsStore: Send + Sync {
    async fn get_stats(&self, event_id: i64) -> CatalogResult<EventStatsEntity>;

    async fn get_daily_stats(
        &self,
        event_id: i64,
        date: NaiveDate,
    ) -> CatalogResult<EventDailyStatsEntity>;

    /// Returns the counter value after the increment.
    async fn increment(
        &self,
        event_id: i64,
        counter: Counter,
    ) -> CatalogResult<i64>;

    async fn increment_daily(
        &self,
        event_id: i64,
        counter: Counter,
        date: NaiveDate,
    ) -> CatalogResult<i64>;
}
