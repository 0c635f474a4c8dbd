use sea_orm_migration::prelude::*;

use crate::m20240601_000002_create_event_title_page_table::EventTitlePage;

const INDEX_NAME: &str = "idx-event_title_page-event_id-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(INDEX_NAME)
                    .table(EventTitlePage::Table)
                    .col(EventTitlePage::EventId)
                    .col(EventTitlePage::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(EventTitlePage::Table)
                    .to_owned(),
            )
            .await
    }
}
