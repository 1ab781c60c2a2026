use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .col(
                        ColumnDef::new(Staff::StaffId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Staff::FirstName).string_len(45).not_null())
                    .col(ColumnDef::new(Staff::LastName).string_len(45).not_null())
                    .col(ColumnDef::new(Staff::AddressId).integer().not_null())
                    .col(ColumnDef::new(Staff::Email).string_len(50))
                    .col(ColumnDef::new(Staff::StoreId).integer().not_null())
                    .col(
                        ColumnDef::new(Staff::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Staff::Username).string_len(16).not_null())
                    .col(ColumnDef::new(Staff::Password).string_len(40))
                    .col(
                        ColumnDef::new(Staff::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(ColumnDef::new(Staff::Picture).binary())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Staff::Table, Staff::AddressId)
                            .to(crate::Address::Table, crate::Address::AddressId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Staff {
    Table,
    StaffId,
    FirstName,
    LastName,
    AddressId,
    Email,
    StoreId,
    Active,
    Username,
    Password,
    LastUpdate,
    Picture,
}
