//! Registered store customer.

use sea_orm::{entity::prelude::*, ActiveValue};

/// Customer model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,

    /// Home store identifier.
    ///
    /// This is a plain value rather than a foreign key.
    pub store_id: i32,

    #[sea_orm(column_type = "String(Some(45))")]
    pub first_name: String,

    #[sea_orm(column_type = "String(Some(45))")]
    pub last_name: String,

    #[sea_orm(column_type = "String(Some(50))", nullable)]
    pub email: Option<String>,

    /// Related address identifier.
    pub address_id: i32,

    /// Whether the customer account is active, `true` for new customers.
    pub activebool: bool,

    pub create_date: TimeDate,

    pub last_update: Option<TimeDateTime>,

    /// Legacy integer activity flag.
    pub active: Option<i32>,
}

/// Customer model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::AddressId"
    )]
    Address,

    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,

    #[sea_orm(has_many = "super::rental::Entity")]
    Rentals,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rentals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            activebool: ActiveValue::Set(true),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}
