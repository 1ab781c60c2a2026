use db::{
    actor, address, category, city, country, customer, film, film_actor, film_category,
    inventory, language, payment, rental, sea_query::Expr, staff, store, ActiveModelTrait,
    ActiveValue, ColumnTrait, DatabaseConnection, Decimal, EntityTrait, PrimitiveDateTime,
    QueryFilter, QuerySelect, SelectExt, TABLES,
};
use common::config::Config;
use sea_orm_migration::sea_orm::Database;
use time::macros::{date, datetime};

use crate::{Migrator, MigratorTrait, SchemaManager};

const PICTURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const STAFF_LAST_UPDATE: PrimitiveDateTime = datetime!(2006-05-16 16:13:11);

async fn create_database() -> DatabaseConnection {
    let config = Config::for_tests();

    let db = Database::connect(&config.database.url)
        .await
        .expect("unable to create test database");

    Migrator::up(&db, None)
        .await
        .expect("unable to run migrations");

    db
}

/// Insert a single row into every table, each with identifier `1`.
async fn create_test_env(db: &DatabaseConnection) {
    country::Entity::insert(country::ActiveModel {
        country_id: ActiveValue::Set(1),
        country: ActiveValue::Set(String::from("Canada")),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert country");

    city::Entity::insert(city::ActiveModel {
        city_id: ActiveValue::Set(1),
        city: ActiveValue::Set(String::from("Lethbridge")),
        country_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert city");

    address::Entity::insert(address::ActiveModel {
        address_id: ActiveValue::Set(1),
        address: ActiveValue::Set(String::from("23 Workhaven Lane")),
        district: ActiveValue::Set(String::from("Alberta")),
        city_id: ActiveValue::Set(1),
        phone: ActiveValue::Set(String::from("14033335568")),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert address");

    language::Entity::insert(language::ActiveModel {
        language_id: ActiveValue::Set(1),
        name: ActiveValue::Set(String::from("English")),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert language");

    category::Entity::insert(category::ActiveModel {
        category_id: ActiveValue::Set(1),
        name: ActiveValue::Set(String::from("Documentary")),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert category");

    actor::Entity::insert(actor::ActiveModel {
        actor_id: ActiveValue::Set(1),
        first_name: ActiveValue::Set(String::from("PENELOPE")),
        last_name: ActiveValue::Set(String::from("GUINESS")),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert actor");

    film::Entity::insert(film::ActiveModel {
        film_id: ActiveValue::Set(1),
        title: ActiveValue::Set(String::from("ACADEMY DINOSAUR")),
        language_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert film");

    film_actor::Entity::insert(film_actor::ActiveModel {
        actor_id: ActiveValue::Set(1),
        film_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert film actor");

    film_category::Entity::insert(film_category::ActiveModel {
        film_id: ActiveValue::Set(1),
        category_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert film category");

    staff::Entity::insert(staff::ActiveModel {
        staff_id: ActiveValue::Set(1),
        first_name: ActiveValue::Set(String::from("Mike")),
        last_name: ActiveValue::Set(String::from("Hillyer")),
        address_id: ActiveValue::Set(1),
        store_id: ActiveValue::Set(1),
        username: ActiveValue::Set(String::from("Mike")),
        last_update: ActiveValue::Set(STAFF_LAST_UPDATE),
        picture: ActiveValue::Set(Some(PICTURE.to_vec())),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert staff member");

    store::Entity::insert(store::ActiveModel {
        store_id: ActiveValue::Set(1),
        manager_staff_id: ActiveValue::Set(1),
        address_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert store");

    customer::Entity::insert(customer::ActiveModel {
        customer_id: ActiveValue::Set(1),
        store_id: ActiveValue::Set(1),
        first_name: ActiveValue::Set(String::from("MARY")),
        last_name: ActiveValue::Set(String::from("SMITH")),
        address_id: ActiveValue::Set(1),
        create_date: ActiveValue::Set(date!(2006-02-14)),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert customer");

    inventory::Entity::insert(inventory::ActiveModel {
        inventory_id: ActiveValue::Set(1),
        film_id: ActiveValue::Set(1),
        store_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert inventory item");

    rental::Entity::insert(rental::ActiveModel {
        rental_id: ActiveValue::Set(1),
        rental_date: ActiveValue::Set(datetime!(2005-05-24 22:53:30)),
        inventory_id: ActiveValue::Set(1),
        customer_id: ActiveValue::Set(1),
        staff_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert rental");

    payment::Entity::insert(payment::ActiveModel {
        payment_id: ActiveValue::Set(1),
        customer_id: ActiveValue::Set(1),
        staff_id: ActiveValue::Set(1),
        rental_id: ActiveValue::Set(Some(1)),
        amount: ActiveValue::Set(Decimal::new(299, 2)),
        payment_date: ActiveValue::Set(datetime!(2005-05-25 11:30:37)),
    })
    .exec_without_returning(db)
    .await
    .expect("unable to insert payment");
}

#[tokio::test]
async fn migrations_up_and_down() {
    let db = create_database().await;
    let manager = SchemaManager::new(&db);

    for table in TABLES {
        assert!(manager.has_table(table).await.unwrap(), "{table} is missing");
    }

    Migrator::down(&db, None)
        .await
        .expect("unable to roll back migrations");

    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "{table} was kept");
    }
}

#[tokio::test]
async fn missing_references_are_rejected() {
    let db = create_database().await;

    create_test_env(&db).await;

    let result = city::Entity::insert(city::ActiveModel {
        city: ActiveValue::Set(String::from("Nowhere")),
        country_id: ActiveValue::Set(42),
        ..Default::default()
    })
    .exec_without_returning(&db)
    .await;

    assert!(result.is_err());

    let result = film_actor::Entity::insert(film_actor::ActiveModel {
        actor_id: ActiveValue::Set(1),
        film_id: ActiveValue::Set(42),
        ..Default::default()
    })
    .exec_without_returning(&db)
    .await;

    assert!(result.is_err());

    let result = payment::Entity::insert(payment::ActiveModel {
        customer_id: ActiveValue::Set(1),
        staff_id: ActiveValue::Set(1),
        rental_id: ActiveValue::Set(Some(42)),
        amount: ActiveValue::Set(Decimal::new(99, 2)),
        payment_date: ActiveValue::Set(datetime!(2005-05-25 11:30:37)),
        ..Default::default()
    })
    .exec_without_returning(&db)
    .await;

    assert!(result.is_err());

    // Payments without a rental are allowed.
    payment::Entity::insert(payment::ActiveModel {
        customer_id: ActiveValue::Set(1),
        staff_id: ActiveValue::Set(1),
        rental_id: ActiveValue::Set(None),
        amount: ActiveValue::Set(Decimal::new(99, 2)),
        payment_date: ActiveValue::Set(datetime!(2005-05-25 11:30:37)),
        ..Default::default()
    })
    .exec_without_returning(&db)
    .await
    .expect("unable to insert payment");
}

#[tokio::test]
async fn restricted_deletion() {
    let db = create_database().await;

    create_test_env(&db).await;

    assert!(actor::Entity::delete_by_id(1).exec(&db).await.is_err());
    assert!(film::Entity::delete_by_id(1).exec(&db).await.is_err());
    assert!(category::Entity::delete_by_id(1).exec(&db).await.is_err());
    assert!(customer::Entity::delete_by_id(1).exec(&db).await.is_err());
    assert!(staff::Entity::delete_by_id(1).exec(&db).await.is_err());
    assert!(inventory::Entity::delete_by_id(1).exec(&db).await.is_err());

    film_actor::Entity::delete_by_id((1, 1))
        .exec(&db)
        .await
        .expect("unable to delete film actor");

    let result = actor::Entity::delete_by_id(1)
        .exec(&db)
        .await
        .expect("unable to delete actor");

    assert_eq!(result.rows_affected, 1);
}

#[tokio::test]
async fn rental_deletion_detaches_payments() {
    let db = create_database().await;

    create_test_env(&db).await;

    rental::Entity::delete_by_id(1)
        .exec(&db)
        .await
        .expect("unable to delete rental");

    let rental_id = payment::Entity::find_by_id(1)
        .select_only()
        .column(payment::Column::RentalId)
        .into_tuple::<Option<i32>>()
        .one(&db)
        .await
        .unwrap();

    assert_eq!(rental_id, Some(None));
}

#[tokio::test]
async fn key_updates_cascade() {
    let db = create_database().await;

    create_test_env(&db).await;

    actor::Entity::update_many()
        .col_expr(actor::Column::ActorId, Expr::value(10))
        .filter(actor::Column::ActorId.eq(1))
        .exec(&db)
        .await
        .expect("unable to update actor");

    let linked = film_actor::Entity::find()
        .filter(film_actor::Column::ActorId.eq(10))
        .select_only()
        .exists(&db)
        .await
        .unwrap();

    assert!(linked);

    rental::Entity::update_many()
        .col_expr(rental::Column::RentalId, Expr::value(7))
        .filter(rental::Column::RentalId.eq(1))
        .exec(&db)
        .await
        .expect("unable to update rental");

    let rental_id = payment::Entity::find_by_id(1)
        .select_only()
        .column(payment::Column::RentalId)
        .into_tuple::<Option<i32>>()
        .one(&db)
        .await
        .unwrap();

    assert_eq!(rental_id, Some(Some(7)));
}

#[tokio::test]
async fn many_to_many_relations() {
    let db = create_database().await;

    create_test_env(&db).await;

    let titles = film::Entity::find()
        .inner_join(actor::Entity)
        .filter(actor::Column::ActorId.eq(1))
        .select_only()
        .column(film::Column::Title)
        .into_tuple::<String>()
        .all(&db)
        .await
        .unwrap();

    assert_eq!(titles, ["ACADEMY DINOSAUR"]);

    let categories = category::Entity::find()
        .inner_join(film::Entity)
        .filter(film::Column::FilmId.eq(1))
        .select_only()
        .column(category::Column::Name)
        .into_tuple::<String>()
        .all(&db)
        .await
        .unwrap();

    assert_eq!(categories, ["Documentary"]);
}

#[tokio::test]
async fn database_defaults() {
    let db = create_database().await;

    create_test_env(&db).await;

    let activebool = customer::Entity::find_by_id(1)
        .select_only()
        .column(customer::Column::Activebool)
        .into_tuple::<bool>()
        .one(&db)
        .await
        .unwrap();

    assert_eq!(activebool, Some(true));

    let (rental_duration, fulltext) = film::Entity::find_by_id(1)
        .select_only()
        .column(film::Column::RentalDuration)
        .column(film::Column::Fulltext)
        .into_tuple::<(i32, String)>()
        .one(&db)
        .await
        .unwrap()
        .expect("film is missing");

    assert_eq!(rental_duration, film::DEFAULT_RENTAL_DURATION);
    assert_eq!(fulltext, "");

    let updated = actor::Entity::find()
        .filter(actor::Column::LastUpdate.is_not_null())
        .select_only()
        .exists(&db)
        .await
        .unwrap();

    assert!(updated);
}

#[tokio::test]
async fn one_store_per_manager() {
    let db = create_database().await;

    create_test_env(&db).await;

    let result = store::Entity::insert(store::ActiveModel {
        manager_staff_id: ActiveValue::Set(1),
        address_id: ActiveValue::Set(1),
        ..Default::default()
    })
    .exec_without_returning(&db)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn staff_picture() {
    let db = create_database().await;

    create_test_env(&db).await;

    let staff_member = staff::Entity::find_by_id(1)
        .one(&db)
        .await
        .unwrap()
        .expect("staff member is missing");

    assert!(staff_member.active);
    assert_eq!(staff_member.last_update, STAFF_LAST_UPDATE);

    let encoded = staff_member
        .picture_base64()
        .expect("picture is missing");

    assert_eq!(encoded, "iVBORw0KGgo=");
    assert_eq!(
        staff::decode_picture(&encoded).unwrap().as_deref(),
        Some(PICTURE)
    );

    let mut model: staff::ActiveModel = staff_member.into();
    model.picture = ActiveValue::Set(None);
    let staff_member = model.update(&db).await.expect("unable to update staff");

    assert_eq!(staff_member.picture_base64(), None);
}

#[tokio::test]
async fn decimals_read_back_exactly() {
    let db = create_database().await;

    create_test_env(&db).await;

    let amounts = ["19.99", "4.99", "999.99", "0.10"];

    for (payment_id, amount) in (2..).zip(amounts) {
        payment::Entity::insert(payment::ActiveModel {
            payment_id: ActiveValue::Set(payment_id),
            customer_id: ActiveValue::Set(1),
            staff_id: ActiveValue::Set(1),
            rental_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(amount.parse().unwrap()),
            payment_date: ActiveValue::Set(datetime!(2005-05-25 11:30:37)),
        })
        .exec_without_returning(&db)
        .await
        .expect("unable to insert payment");
    }

    for (payment_id, amount) in (2..).zip(amounts) {
        let payment = payment::Entity::find_by_id(payment_id)
            .one(&db)
            .await
            .unwrap()
            .expect("payment is missing");

        assert_eq!(payment.amount, amount.parse::<Decimal>().unwrap());
    }

    let (rental_rate, replacement_cost) = film::Entity::find_by_id(1)
        .select_only()
        .column(film::Column::RentalRate)
        .column(film::Column::ReplacementCost)
        .into_tuple::<(Decimal, Decimal)>()
        .one(&db)
        .await
        .unwrap()
        .expect("film is missing");

    assert_eq!(rental_rate, film::DEFAULT_RENTAL_RATE);
    assert_eq!(replacement_cost, film::DEFAULT_REPLACEMENT_COST);
}

#[tokio::test]
async fn film_rows_without_array_support() {
    let db = create_database().await;

    create_test_env(&db).await;

    // `special_features` is plain text here and can't be decoded as a list.
    assert!(film::Entity::find_by_id(1).one(&db).await.is_err());

    let title = film::Entity::find_by_id(1)
        .select_only()
        .column(film::Column::Title)
        .into_tuple::<String>()
        .one(&db)
        .await
        .unwrap();

    assert_eq!(title.as_deref(), Some("ACADEMY DINOSAUR"));
}
