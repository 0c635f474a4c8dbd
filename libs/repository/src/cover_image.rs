use async_trait::async_trait;
use catalog::{CatalogResult, CoverImageStore};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use crate::response::IntoCatalogResult;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CoverImageRepository {
    db: DatabaseConnection,
}

impl CoverImageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event_title_page::Model> for CoverImageEntity {
    fn from(value: event_title_page::Model) -> Self {
        Self {
            id: value.id,
            event_id: value.event_id,
            image_url: value.image_url,
            created_at: value.created_at,
        }
    }
}

#[async_trait]
impl CoverImageStore for CoverImageRepository {
    async fn find_all_order_by_created_at_desc(
        &self,
    ) -> CatalogResult<Vec<CoverImageEntity>> {
        let cover_images = EventTitlePage::find()
            .order_by_desc(event_title_page::Column::CreatedAt)
            .order_by_desc(event_title_page::Column::Id)
            .all(&self.db)
            .await
            .into_catalog("find all cover images")?;

        Ok(cover_images
            .into_iter()
            .map(CoverImageEntity::from)
            .collect())
    }

    async fn find_most_recent_by_event_id(
        &self,
        event_id: i64,
    ) -> CatalogResult<Option<CoverImageEntity>> {
        let cover_image = EventTitlePage::find()
            .filter(event_title_page::Column::EventId.eq(event_id))
            .order_by_desc(event_title_page::Column::CreatedAt)
            .order_by_desc(event_title_page::Column::Id)
            .one(&self.db)
            .await
            .into_catalog("find cover image by event id")?;

        Ok(cover_image.map(CoverImageEntity::from))
    }
}
