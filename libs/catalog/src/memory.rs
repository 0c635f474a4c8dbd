//! In-process store implementing every collaborator trait, used by tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        PoisonError, RwLock,
    },
};

use async_trait::async_trait;
use chrono::NaiveDate;
use entity::prelude::*;

use crate::{
    CatalogError, CatalogResult, CoverImageStore, EventIntroStore,
    EventStatsStore, EventStore,
};

type CounterKey = (i64, Counter, Option<NaiveDate>);

#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: RwLock<Vec<EventEntity>>,
    cover_images: RwLock<Vec<CoverImageEntity>>,
    intros: RwLock<Vec<EventIntroEntity>>,
    counters: RwLock<HashMap<CounterKey, i64>>,
    unavailable: AtomicBool,
    event_reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(self, event: EventEntity) -> Self {
        self.insert_event(event);
        self
    }

    pub fn with_cover(self, cover_image: CoverImageEntity) -> Self {
        self.cover_images
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cover_image);
        self
    }

    pub fn with_intro(self, intro: EventIntroEntity) -> Self {
        self.intros
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intro);
        self
    }

    /// Replaces any event with the same id.
    pub fn insert_event(&self, event: EventEntity) {
        let mut events =
            self.events.write().unwrap_or_else(PoisonError::into_inner);
        events.retain(|e| e.id != event.id);
        events.push(event);
    }

    /// Makes every subsequent call fail with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of event reads that reached this store.
    pub fn event_reads(&self) -> usize {
        self.event_reads.load(Ordering::SeqCst)
    }

    fn check(&self, operation: &'static str) -> CatalogResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CatalogError::store_unavailable(
                operation,
                "in-memory store marked unavailable",
            ));
        }
        Ok(())
    }

    fn counter(&self, key: CounterKey) -> i64 {
        self.counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied()
            .unwrap_or_default()
    }

    fn bump(&self, key: CounterKey) -> i64 {
        let mut counters =
            self.counters.write().unwrap_or_else(PoisonError::into_inner);
        let count = counters.entry(key).or_default();
        *count += 1;
        *count
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn find_by_status_in(
        &self,
        status_ids: &[i32],
    ) -> CatalogResult<Vec<EventEntity>> {
        self.check("find_by_status_in")?;
        self.event_reads.fetch_add(1, Ordering::SeqCst);
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);

        Ok(events
            .iter()
            .filter(|e| status_ids.contains(&e.status_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<EventEntity>> {
        self.check("find_by_id")?;
        self.event_reads.fetch_add(1, Ordering::SeqCst);
        let events = self.events.read().unwrap_or_else(PoisonError::into_inner);

        Ok(events.iter().find(|e| e.id == id).cloned())
    }
}

#[async_trait]
impl CoverImageStore for InMemoryStore {
    async fn find_all_order_by_created_at_desc(
        &self,
    ) -> CatalogResult<Vec<CoverImageEntity>> {
        self.check("find_all_order_by_created_at_desc")?;
        let mut cover_images = self
            .cover_images
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        cover_images.sort_by(|a, b| {
            (b.created_at, b.id).cmp(&(a.created_at, a.id))
        });

        Ok(cover_images)
    }

    async fn find_most_recent_by_event_id(
        &self,
        event_id: i64,
    ) -> CatalogResult<Option<CoverImageEntity>> {
        self.check("find_most_recent_by_event_id")?;
        let cover_images = self
            .cover_images
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        Ok(cover_images
            .iter()
            .filter(|c| c.event_id == event_id)
            .max_by_key(|c| (c.created_at, c.id))
            .cloned())
    }
}

#[async_trait]
impl EventIntroStore for InMemoryStore {
    async fn find_by_event_id(
        &self,
        event_id: i64,
    ) -> CatalogResult<Option<EventIntroEntity>> {
        self.check("find_intro_by_event_id")?;
        let intros = self.intros.read().unwrap_or_else(PoisonError::into_inner);

        Ok(intros.iter().find(|i| i.event_id == event_id).cloned())
    }
}

#[async_trait]
impl EventStatsStore for InMemoryStore {
    async fn get_stats(&self, event_id: i64) -> CatalogResult<EventStatsEntity> {
        self.check("get_stats")?;

        Ok(EventStatsEntity {
            event_id,
            views: self.counter((event_id, Counter::View, None)),
            shares: self.counter((event_id, Counter::Share, None)),
        })
    }

    async fn get_daily_stats(
        &self,
        event_id: i64,
        date: NaiveDate,
    ) -> CatalogResult<EventDailyStatsEntity> {
        self.check("get_daily_stats")?;

        Ok(EventDailyStatsEntity {
            event_id,
            date,
            views: self.counter((event_id, Counter::View, Some(date))),
            shares: self.counter((event_id, Counter::Share, Some(date))),
        })
    }

    async fn increment(
        &self,
        event_id: i64,
        counter: Counter,
    ) -> CatalogResult<i64> {
        self.check("increment")?;
        Ok(self.bump((event_id, counter, None)))
    }

    async fn increment_daily(
        &self,
        event_id: i64,
        counter: Counter,
        date: NaiveDate,
    ) -> CatalogResult<i64> {
        self.check("increment_daily")?;
        Ok(self.bump((event_id, counter, Some(date))))
    }
}
