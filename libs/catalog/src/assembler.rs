use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDateTime;
use entity::{
    cover_image::{normalize_image_url, DEFAULT_COVER_IMAGE},
    prelude::*,
};

use crate::{CatalogResult, CoverImageStore, EventStore};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Public projection of a visible event. Built on every cache miss, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub id: i64,
    pub image: String,
    pub address: String,
    pub event_start: String,
    pub event_end: String,
    pub title: String,
    pub status_id: i32,
}

pub type EventDetail = EventSummary;

impl EventSummary {
    fn new(event: EventEntity, image: String) -> Self {
        Self {
            id: event.id,
            image,
            address: event.address,
            event_start: display_timestamp(event.event_start),
            event_end: display_timestamp(event.event_end),
            title: event.title,
            status_id: event.status_id,
        }
    }
}

fn display_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|timestamp| timestamp.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct EventAssembler {
    events: Arc<dyn EventStore>,
    cover_images: Arc<dyn CoverImageStore>,
}

impl EventAssembler {
    pub fn new(
        events: Arc<dyn EventStore>,
        cover_images: Arc<dyn CoverImageStore>,
    ) -> Self {
        Self {
            events,
            cover_images,
        }
    }

    /// Visible events, highest id first, each with its newest cover image.
    pub async fn list_visible_events(
        &self,
    ) -> CatalogResult<Vec<EventSummary>> {
        let events = self
            .events
            .find_by_status_in(&EventStatus::visible_ids())
            .await?;
        let cover_images = self
            .cover_images
            .find_all_order_by_created_at_desc()
            .await?;

        // first hit per event is the newest
        let mut images: HashMap<i64, Option<String>> = HashMap::new();
        for cover_image in cover_images {
            images
                .entry(cover_image.event_id)
                .or_insert(cover_image.image_url);
        }

        let mut summaries: Vec<_> = events
            .into_iter()
            .filter(EventEntity::is_visible)
            .map(|event| {
                let raw = match images.get(&event.id) {
                    Some(image_url) => image_url.as_deref(),
                    None => Some(DEFAULT_COVER_IMAGE),
                };
                let image = normalize_image_url(raw);
                EventSummary::new(event, image)
            })
            .collect();
        summaries.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(summaries)
    }

    /// `None` when the event is missing or not visible.
    pub async fn get_event_detail(
        &self,
        id: i64,
    ) -> CatalogResult<Option<EventDetail>> {
        let Some(event) = self.events.find_by_id(id).await? else {
            return Ok(None);
        };
        if !event.is_visible() {
            return Ok(None);
        }

        let cover_image =
            self.cover_images.find_most_recent_by_event_id(id).await?;
        let image = normalize_image_url(
            cover_image
                .as_ref()
                .and_then(|cover_image| cover_image.image_url.as_deref()),
        );

        Ok(Some(EventSummary::new(event, image)))
    }
}
