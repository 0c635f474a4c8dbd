use std::sync::Arc;

use tracing::info;

use crate::{
    CachePolicy, CatalogResult, EventAssembler, EventDetail, EventSummary,
    ResultCache,
};

const ALL_EVENTS_KEY: &str = "all";

/// Addresses one entry of one cache region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    AllEvents,
    EventDetail(i64),
}

/// Cached front of [`EventAssembler`]: the full listing lives in the
/// `events` region under a constant key, details in `event_detail` by id.
#[derive(Clone)]
pub struct EventCatalog {
    assembler: EventAssembler,
    events: ResultCache<&'static str, Arc<Vec<EventSummary>>>,
    event_detail: ResultCache<i64, Option<EventDetail>>,
}

impl EventCatalog {
    pub fn new(assembler: EventAssembler, policy: CachePolicy) -> Self {
        Self {
            assembler,
            events: ResultCache::new("events", policy),
            event_detail: ResultCache::new("event_detail", policy),
        }
    }

    pub async fn list_visible_events(
        &self,
    ) -> CatalogResult<Arc<Vec<EventSummary>>> {
        self.events
            .get_or_compute(ALL_EVENTS_KEY, || async {
                self.assembler.list_visible_events().await.map(Arc::new)
            })
            .await
    }

    /// Not-found results are cached as well.
    pub async fn get_event_detail(
        &self,
        id: i64,
    ) -> CatalogResult<Option<EventDetail>> {
        self.event_detail
            .get_or_compute(id, || self.assembler.get_event_detail(id))
            .await
    }

    pub async fn invalidate(&self, key: CacheKey) {
        match key {
            CacheKey::AllEvents => self.events.invalidate(&ALL_EVENTS_KEY).await,
            CacheKey::EventDetail(id) => self.event_detail.invalidate(&id).await,
        }
    }

    /// Drops the detail entry for `id` and the listing that contains it.
    pub async fn invalidate_event(&self, id: i64) {
        info!(task = "invalidate event", event_id = id);
        self.invalidate(CacheKey::EventDetail(id)).await;
        self.invalidate(CacheKey::AllEvents).await;
    }

    pub fn invalidate_all(&self) {
        info!(task = "invalidate all");
        self.events.invalidate_all();
        self.event_detail.invalidate_all();
    }
}
