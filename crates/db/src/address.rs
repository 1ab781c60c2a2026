//! Postal address shared by customers, staff members and stores.

use sea_orm::entity::prelude::*;

/// Address model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub address_id: i32,

    /// First address line.
    #[sea_orm(column_type = "String(Some(50))")]
    pub address: String,

    /// Optional second address line.
    #[sea_orm(column_type = "String(Some(50))", nullable)]
    pub address2: Option<String>,

    #[sea_orm(column_type = "String(Some(20))")]
    pub district: String,

    /// Related city identifier.
    pub city_id: i32,

    #[sea_orm(column_type = "String(Some(10))", nullable)]
    pub postal_code: Option<String>,

    #[sea_orm(column_type = "String(Some(20))")]
    pub phone: String,

    pub last_update: TimeDateTime,
}

/// Address model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::CityId"
    )]
    City,

    #[sea_orm(has_many = "super::customer::Entity")]
    Customers,

    #[sea_orm(has_many = "super::staff::Entity")]
    Staff,

    #[sea_orm(has_many = "super::store::Entity")]
    Stores,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
