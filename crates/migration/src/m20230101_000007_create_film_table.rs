use db::film::{DEFAULT_RENTAL_DURATION, DEFAULT_RENTAL_RATE, DEFAULT_REPLACEMENT_COST};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectionTrait, DbBackend, Statement},
};

/// Keeps `film.fulltext` in sync with the title and description on PostgreSQL.
const FULLTEXT_TRIGGER: &str = "CREATE TRIGGER film_fulltext_trigger \
    BEFORE INSERT OR UPDATE ON film \
    FOR EACH ROW EXECUTE FUNCTION \
    tsvector_update_trigger(fulltext, 'pg_catalog.english', title, description)";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        let mut special_features = ColumnDef::new(Film::SpecialFeatures);
        let mut fulltext = ColumnDef::new(Film::Fulltext);

        // Arrays and text search documents are PostgreSQL-specific,
        // other backends store both as plain text.
        if backend == DbBackend::Postgres {
            special_features.custom(Alias::new("text[]"));
            fulltext.custom(Alias::new("tsvector")).not_null();
        } else {
            special_features.text();
            fulltext.text().not_null().default("");
        }

        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .col(
                        ColumnDef::new(Film::FilmId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Film::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Film::Description).text())
                    .col(ColumnDef::new(Film::ReleaseYear).integer())
                    .col(ColumnDef::new(Film::LanguageId).integer().not_null())
                    .col(
                        ColumnDef::new(Film::RentalDuration)
                            .integer()
                            .not_null()
                            .default(DEFAULT_RENTAL_DURATION),
                    )
                    .col(
                        ColumnDef::new(Film::RentalRate)
                            .decimal_len(4, 2)
                            .not_null()
                            .default(DEFAULT_RENTAL_RATE),
                    )
                    .col(ColumnDef::new(Film::Length).integer())
                    .col(
                        ColumnDef::new(Film::ReplacementCost)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(DEFAULT_REPLACEMENT_COST),
                    )
                    .col(ColumnDef::new(Film::Rating).string())
                    .col(
                        ColumnDef::new(Film::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(&mut special_features)
                    .col(&mut fulltext)
                    .foreign_key(
                        ForeignKey::create()
                            .from(Film::Table, Film::LanguageId)
                            .to(crate::Language::Table, crate::Language::LanguageId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_language_id")
                    .table(Film::Table)
                    .col(Film::LanguageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_film_title")
                    .table(Film::Table)
                    .col(Film::Title)
                    .to_owned(),
            )
            .await?;

        if backend == DbBackend::Postgres {
            manager
                .get_connection()
                .execute(Statement::from_string(
                    backend,
                    FULLTEXT_TRIGGER.to_owned(),
                ))
                .await?;

            manager
                .get_connection()
                .execute(Statement::from_string(
                    backend,
                    "CREATE INDEX idx_film_fulltext ON film USING gist (fulltext)".to_owned(),
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Film {
    Table,
    FilmId,
    Title,
    Description,
    ReleaseYear,
    LanguageId,
    RentalDuration,
    RentalRate,
    Length,
    ReplacementCost,
    Rating,
    LastUpdate,
    SpecialFeatures,
    Fulltext,
}
