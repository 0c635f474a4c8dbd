use async_trait::async_trait;
use catalog::{CatalogResult, EventIntroStore};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::active_models::{prelude::*, *};
use crate::response::IntoCatalogResult;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventIntroRepository {
    db: DatabaseConnection,
}

impl EventIntroRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event_detail::Model> for EventIntroEntity {
    fn from(value: event_detail::Model) -> Self {
        Self {
            event_id: value.event_id,
            content: value.content,
        }
    }
}

#[async_trait]
impl EventIntroStore for EventIntroRepository {
    async fn find_by_event_id(
        &self,
        event_id: i64,
    ) -> CatalogResult<Option<EventIntroEntity>> {
        let intro = EventDetail::find()
            .filter(event_detail::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
            .into_catalog("find event intro")?;

        Ok(intro.map(EventIntroEntity::from))
    }
}
