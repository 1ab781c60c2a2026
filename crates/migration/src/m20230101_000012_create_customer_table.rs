use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .col(
                        ColumnDef::new(Customer::CustomerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customer::StoreId).integer().not_null())
                    .col(
                        ColumnDef::new(Customer::FirstName)
                            .string_len(45)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customer::LastName).string_len(45).not_null())
                    .col(ColumnDef::new(Customer::Email).string_len(50))
                    .col(ColumnDef::new(Customer::AddressId).integer().not_null())
                    .col(
                        ColumnDef::new(Customer::Activebool)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Customer::CreateDate)
                            .date()
                            .not_null()
                            .extra("DEFAULT CURRENT_DATE".to_string()),
                    )
                    .col(
                        ColumnDef::new(Customer::LastUpdate)
                            .timestamp()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(ColumnDef::new(Customer::Active).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Customer::Table, Customer::AddressId)
                            .to(crate::Address::Table, crate::Address::AddressId),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_customer_address_id", Customer::AddressId),
            ("idx_customer_store_id", Customer::StoreId),
            ("idx_customer_last_name", Customer::LastName),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Customer::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Customer {
    Table,
    CustomerId,
    StoreId,
    FirstName,
    LastName,
    Email,
    AddressId,
    Activebool,
    CreateDate,
    LastUpdate,
    Active,
}
