//! Film cast member.
//!
//! Actors are linked to the films they star in through the [`film_actor`] table,
//! which prevents an actor from being deleted while any such link exists.
//!
//! [`film_actor`]: super::film_actor

use sea_orm::entity::prelude::*;

/// Actor model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    /// Unique actor identifier.
    #[sea_orm(primary_key)]
    pub actor_id: i32,

    #[sea_orm(column_type = "String(Some(45))")]
    pub first_name: String,

    #[sea_orm(column_type = "String(Some(45))")]
    pub last_name: String,

    /// Last modification timestamp.
    pub last_update: TimeDateTime,
}

/// Actor model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film_actor::Entity")]
    FilmActors,
}

impl Related<super::film_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmActors.def()
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_actor::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_actor::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
