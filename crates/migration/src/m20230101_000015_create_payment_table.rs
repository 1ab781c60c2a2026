use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .col(
                        ColumnDef::new(Payment::PaymentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payment::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Payment::StaffId).integer().not_null())
                    // Nullable, so that deleting a rental detaches its payments.
                    .col(ColumnDef::new(Payment::RentalId).integer())
                    .col(
                        ColumnDef::new(Payment::Amount)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payment::PaymentDate).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payment::Table, Payment::CustomerId)
                            .to(crate::Customer::Table, crate::Customer::CustomerId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payment::Table, Payment::StaffId)
                            .to(crate::Staff::Table, crate::Staff::StaffId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payment::Table, Payment::RentalId)
                            .to(crate::Rental::Table, crate::Rental::RentalId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_payment_customer_id", Payment::CustomerId),
            ("idx_payment_staff_id", Payment::StaffId),
            ("idx_payment_rental_id", Payment::RentalId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Payment::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Payment {
    Table,
    PaymentId,
    CustomerId,
    StaffId,
    RentalId,
    Amount,
    PaymentDate,
}
