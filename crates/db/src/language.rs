use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "language")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub language_id: i32,
    #[sea_orm(column_type = "String(Some(20))")]
    pub name: String,
    pub last_update: TimeDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::film::Entity")]
    Films,
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Films.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
