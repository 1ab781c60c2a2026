//! A single physical copy of a film held by a store.

use sea_orm::entity::prelude::*;

/// Inventory item model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub inventory_id: i32,

    /// Related film identifier.
    pub film_id: i32,

    /// Owning store identifier.
    ///
    /// This is a plain value rather than a foreign key.
    pub store_id: i32,

    pub last_update: TimeDateTime,
}

/// Inventory item model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::film::Entity",
        from = "Column::FilmId",
        to = "super::film::Column::FilmId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Film,

    #[sea_orm(has_many = "super::rental::Entity")]
    Rentals,
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rentals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
