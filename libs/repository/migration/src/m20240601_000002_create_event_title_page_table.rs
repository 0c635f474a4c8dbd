use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventTitlePage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventTitlePage::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EventTitlePage::EventId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EventTitlePage::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(EventTitlePage::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventTitlePage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventTitlePage {
    Table,
    Id,
    EventId,
    ImageUrl,
    CreatedAt,
}
