use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FilmActor::Table)
                    .col(ColumnDef::new(FilmActor::ActorId).integer().not_null())
                    .col(ColumnDef::new(FilmActor::FilmId).integer().not_null())
                    .col(
                        ColumnDef::new(FilmActor::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FilmActor::ActorId)
                            .col(FilmActor::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmActor::Table, FilmActor::ActorId)
                            .to(crate::Actor::Table, crate::Actor::ActorId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmActor::Table, FilmActor::FilmId)
                            .to(crate::Film::Table, crate::Film::FilmId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_actor_film_id")
                    .table(FilmActor::Table)
                    .col(FilmActor::FilmId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FilmActor::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum FilmActor {
    Table,
    ActorId,
    FilmId,
    LastUpdate,
}
