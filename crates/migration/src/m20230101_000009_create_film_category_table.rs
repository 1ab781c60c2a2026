use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmCategory::Table)
                    .col(ColumnDef::new(FilmCategory::FilmId).integer().not_null())
                    .col(
                        ColumnDef::new(FilmCategory::CategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FilmCategory::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FilmCategory::FilmId)
                            .col(FilmCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmCategory::Table, FilmCategory::FilmId)
                            .to(crate::Film::Table, crate::Film::FilmId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmCategory::Table, FilmCategory::CategoryId)
                            .to(crate::Category::Table, crate::Category::CategoryId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_category_category_id")
                    .table(FilmCategory::Table)
                    .col(FilmCategory::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FilmCategory::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum FilmCategory {
    Table,
    FilmId,
    CategoryId,
    LastUpdate,
}
