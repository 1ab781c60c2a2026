//! Video rental store schema.
//!
//! Every module in this crate describes a single database table as a SeaORM entity:
//! its columns, keys and relations to other tables. Table creation itself is handled
//! by the `migration` crate.

pub mod actor;
pub mod address;
pub mod category;
pub mod city;
pub mod country;
pub mod customer;
pub mod film;
pub mod film_actor;
pub mod film_category;
pub mod inventory;
pub mod language;
pub mod payment;
pub mod prelude;
pub mod rental;
pub mod staff;
pub mod store;

use async_trait::async_trait;
pub use sea_orm::{
    prelude::Decimal, sea_query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    Database, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, StatementBuilder,
};
pub use time::{Date, PrimitiveDateTime};

/// Names of every table in the schema.
///
/// Tables are ordered so that each table only references tables listed before it.
pub const TABLES: [&str; 15] = [
    "country",
    "city",
    "address",
    "language",
    "category",
    "actor",
    "film",
    "film_actor",
    "film_category",
    "staff",
    "store",
    "customer",
    "inventory",
    "rental",
    "payment",
];

#[async_trait]
pub trait SelectExt {
    /// Check if at least one record that satisfies a query.
    async fn exists<C: ConnectionTrait + Send>(self, db: &C) -> Result<bool, DbErr>;
}

#[async_trait]
impl<T> SelectExt for T
where
    T: QueryTrait<QueryStatement = sea_query::SelectStatement> + Send,
{
    async fn exists<C: ConnectionTrait + Send>(self, db: &C) -> Result<bool, DbErr> {
        use sea_query::{Expr, Query};

        let mut query = self.into_query();

        // Fix failing tests with SQLite by returning at least some expr
        query.expr(1);

        let stmt = StatementBuilder::build(
            Query::select().expr(Expr::exists(query)),
            &db.get_database_backend(),
        );

        match db.query_one(stmt).await? {
            Some(row) => row.try_get_by_index(0),
            None => Ok(false),
        }
    }
}
