pub use sea_orm_migration::prelude::*;

mod m20230101_000001_create_country_table;
mod m20230101_000002_create_city_table;
mod m20230101_000003_create_address_table;
mod m20230101_000004_create_language_table;
mod m20230101_000005_create_category_table;
mod m20230101_000006_create_actor_table;
mod m20230101_000007_create_film_table;
mod m20230101_000008_create_film_actor_table;
mod m20230101_000009_create_film_category_table;
mod m20230101_000010_create_staff_table;
mod m20230101_000011_create_store_table;
mod m20230101_000012_create_customer_table;
mod m20230101_000013_create_inventory_table;
mod m20230101_000014_create_rental_table;
mod m20230101_000015_create_payment_table;

#[cfg(test)]
mod tests;

pub(crate) use m20230101_000001_create_country_table::Country;
pub(crate) use m20230101_000002_create_city_table::City;
pub(crate) use m20230101_000003_create_address_table::Address;
pub(crate) use m20230101_000004_create_language_table::Language;
pub(crate) use m20230101_000005_create_category_table::Category;
pub(crate) use m20230101_000006_create_actor_table::Actor;
pub(crate) use m20230101_000007_create_film_table::Film;
pub(crate) use m20230101_000010_create_staff_table::Staff;
pub(crate) use m20230101_000012_create_customer_table::Customer;
pub(crate) use m20230101_000013_create_inventory_table::Inventory;
pub(crate) use m20230101_000014_create_rental_table::Rental;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230101_000001_create_country_table::Migration),
            Box::new(m20230101_000002_create_city_table::Migration),
            Box::new(m20230101_000003_create_address_table::Migration),
            Box::new(m20230101_000004_create_language_table::Migration),
            Box::new(m20230101_000005_create_category_table::Migration),
            Box::new(m20230101_000006_create_actor_table::Migration),
            Box::new(m20230101_000007_create_film_table::Migration),
            Box::new(m20230101_000008_create_film_actor_table::Migration),
            Box::new(m20230101_000009_create_film_category_table::Migration),
            Box::new(m20230101_000010_create_staff_table::Migration),
            Box::new(m20230101_000011_create_store_table::Migration),
            Box::new(m20230101_000012_create_customer_table::Migration),
            Box::new(m20230101_000013_create_inventory_table::Migration),
            Box::new(m20230101_000014_create_rental_table::Migration),
            Box::new(m20230101_000015_create_payment_table::Migration),
        ]
    }
}
