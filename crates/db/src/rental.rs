//! Rental of a single inventory item by a customer.
//!
//! Rentals can't outlive the inventory item, customer or staff member they
//! reference. Deleting a rental keeps its payments, detaching them instead.

use sea_orm::entity::prelude::*;

/// Rental model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rental")]
pub struct Model {
    /// Unique rental identifier.
    #[sea_orm(primary_key)]
    pub rental_id: i32,

    pub rental_date: TimeDateTime,

    /// Rented inventory item identifier.
    pub inventory_id: i32,

    /// Related customer identifier.
    pub customer_id: i32,

    /// Return timestamp.
    ///
    /// [`None`] while the item is still rented out.
    pub return_date: Option<TimeDateTime>,

    /// Identifier of the staff member who processed the rental.
    pub staff_id: i32,

    pub last_update: TimeDateTime,
}

/// Rental model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory::Entity",
        from = "Column::InventoryId",
        to = "super::inventory::Column::InventoryId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Inventory,

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

    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
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

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
