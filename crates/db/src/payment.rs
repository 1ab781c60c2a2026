//! Customer payment.
//!
//! Payment amounts are stored as fixed-precision decimals with two
//! fractional digits.

use sea_orm::entity::prelude::*;

/// Payment model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    /// Unique payment identifier.
    #[sea_orm(primary_key)]
    pub payment_id: i32,

    /// Paying customer identifier.
    pub customer_id: i32,

    /// Identifier of the staff member who accepted the payment.
    pub staff_id: i32,

    /// Related rental identifier.
    ///
    /// Reset to [`None`] when the rental is deleted.
    pub rental_id: Option<i32>,

    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub amount: Decimal,

    pub payment_date: TimeDateTime,
}

/// Payment model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Customer,

    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::StaffId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Staff,

    #[sea_orm(
        belongs_to = "super::rental::Entity",
        from = "Column::RentalId",
        to = "super::rental::Column::RentalId",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Rental,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rental.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
