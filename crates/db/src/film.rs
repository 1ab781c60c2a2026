//! Film catalogue entry.
//!
//! Rental pricing uses fixed-precision decimals. The `fulltext` column is a
//! full-text search document kept up to date by the database itself, so it is
//! never written by the application.

use sea_orm::{
    entity::prelude::*,
    sea_query::{Alias, Func, IntoColumnRef, SimpleExpr},
    ActiveValue, Iterable, QuerySelect,
};

/// Default rental duration, in days.
pub const DEFAULT_RENTAL_DURATION: i32 = 3;

/// Default rental rate, `4.99`.
pub const DEFAULT_RENTAL_RATE: Decimal = Decimal::from_parts(499, 0, 0, false, 2);

/// Default replacement cost, `19.99`.
pub const DEFAULT_REPLACEMENT_COST: Decimal = Decimal::from_parts(1999, 0, 0, false, 2);

/// Film model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    /// Unique film identifier.
    #[sea_orm(primary_key)]
    pub film_id: i32,

    #[sea_orm(column_type = "String(Some(255))")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub release_year: Option<i32>,

    /// Related language identifier.
    pub language_id: i32,

    /// Rental duration, in days.
    pub rental_duration: i32,

    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub rental_rate: Decimal,

    /// Film length, in minutes.
    pub length: Option<i32>,

    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub replacement_cost: Decimal,

    /// MPAA rating, such as `PG-13`.
    #[sea_orm(column_type = "String(None)", nullable)]
    pub rating: Option<String>,

    pub last_update: TimeDateTime,

    /// Bonus material shipped with the film, for example `Trailers` or `Deleted Scenes`.
    pub special_features: Option<Vec<String>>,

    /// Full-text search document built from the title and description.
    ///
    /// Use [`find_with_fulltext`] to load it on PostgreSQL, where the column
    /// is not stored as text.
    #[sea_orm(
        column_type = "Custom(sea_orm::sea_query::SeaRc::new(sea_orm::sea_query::Alias::new(\"tsvector\")))"
    )]
    pub fulltext: String,
}

/// Film model relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::LanguageId"
    )]
    Language,

    #[sea_orm(has_many = "super::film_actor::Entity")]
    FilmActors,

    #[sea_orm(has_many = "super::film_category::Entity")]
    FilmCategories,

    #[sea_orm(has_many = "super::inventory::Entity")]
    Inventory,
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::film_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmActors.def()
    }
}

impl Related<super::film_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmCategories.def()
    }
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
}

impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_actor::Relation::Actor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_actor::Relation::Film.def().rev())
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_category::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            rental_duration: ActiveValue::Set(DEFAULT_RENTAL_DURATION),
            rental_rate: ActiveValue::Set(DEFAULT_RENTAL_RATE),
            replacement_cost: ActiveValue::Set(DEFAULT_REPLACEMENT_COST),
            ..<Self as ActiveModelTrait>::default()
        }
    }
}

/// Select every film column, reading `fulltext` through a cast to text.
///
/// Complete film rows can only be loaded from PostgreSQL: `special_features`
/// is a text array there, and other backends cannot decode it into
/// `Vec<String>`. On those backends select individual columns instead.
pub fn find_with_fulltext() -> Select<Entity> {
    let fulltext = SimpleExpr::Column((Entity, Column::Fulltext).into_column_ref());

    Entity::find()
        .select_only()
        .columns(Column::iter().filter(|column| !matches!(column, Column::Fulltext)))
        .column_as(
            SimpleExpr::FunctionCall(Func::cast_as(fulltext, Alias::new("text"))),
            "fulltext",
        )
}
