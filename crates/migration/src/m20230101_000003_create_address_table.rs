use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .col(
                        ColumnDef::new(Address::AddressId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Address::Address).string_len(50).not_null())
                    .col(ColumnDef::new(Address::Address2).string_len(50))
                    .col(ColumnDef::new(Address::District).string_len(20).not_null())
                    .col(ColumnDef::new(Address::CityId).integer().not_null())
                    .col(ColumnDef::new(Address::PostalCode).string_len(10))
                    .col(ColumnDef::new(Address::Phone).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Address::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Address::Table, Address::CityId)
                            .to(crate::City::Table, crate::City::CityId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_address_city_id")
                    .table(Address::Table)
                    .col(Address::CityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Address {
    Table,
    AddressId,
    Address,
    Address2,
    District,
    CityId,
    PostalCode,
    Phone,
    LastUpdate,
}
