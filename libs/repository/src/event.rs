use async_trait::async_trait;
use catalog::{CatalogResult, EventStore};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::active_models::{prelude::*, *};
use crate::response::IntoCatalogResult;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            address: value.address,
            event_start: value.event_start,
            event_end: value.event_end,
            status_id: value.status_id,
        }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn find_by_status_in(
        &self,
        status_ids: &[i32],
    ) -> CatalogResult<Vec<EventEntity>> {
        let events = Event::find()
            .filter(event::Column::StatusId.is_in(status_ids.iter().copied()))
            .all(&self.db)
            .await
            .into_catalog("find events by status")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(&self.db)
            .await
            .into_catalog("find event by id")?;

        Ok(event.map(EventEntity::from))
    }
}
