use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rental::Table)
                    .col(
                        ColumnDef::new(Rental::RentalId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rental::RentalDate).timestamp().not_null())
                    .col(ColumnDef::new(Rental::InventoryId).integer().not_null())
                    .col(ColumnDef::new(Rental::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Rental::ReturnDate).timestamp())
                    .col(ColumnDef::new(Rental::StaffId).integer().not_null())
                    .col(
                        ColumnDef::new(Rental::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rental::Table, Rental::InventoryId)
                            .to(crate::Inventory::Table, crate::Inventory::InventoryId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rental::Table, Rental::CustomerId)
                            .to(crate::Customer::Table, crate::Customer::CustomerId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rental::Table, Rental::StaffId)
                            .to(crate::Staff::Table, crate::Staff::StaffId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_inventory_id")
                    .table(Rental::Table)
                    .col(Rental::InventoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rental::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub(crate) enum Rental {
    Table,
    RentalId,
    RentalDate,
    InventoryId,
    CustomerId,
    ReturnDate,
    StaffId,
    LastUpdate,
}
