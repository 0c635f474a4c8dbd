use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Event::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Event::Title).string().not_null())
                    .col(ColumnDef::new(Event::Address).string().not_null())
                    .col(ColumnDef::new(Event::EventStart).date_time().null())
                    .col(ColumnDef::new(Event::EventEnd).date_time().null())
                    .col(
                        ColumnDef::new(Event::StatusId)
                            .integer()
                            .not_null()
                            .check(Expr::col(Event::StatusId).between(1, 5)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Address,
    EventStart,
    EventEnd,
    StatusId,
}
