//! Shared fixtures for database-backed tests.
//!
//! Tables are created with IF NOT EXISTS under an advisory lock so test
//! binaries can share one database. Every fixture uses unique values, so no
//! test depends on another's rows.

#![allow(dead_code)]

use chrono::NaiveDate;
use lightbnb_db::{create_pool, Database, NewProperty, NewUser, Reservation, User};

const SCHEMA_LOCK: i64 = 0x4c42_4e42;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY NOT NULL,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS properties (
        id SERIAL PRIMARY KEY NOT NULL,
        owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        title VARCHAR(255) NOT NULL,
        description TEXT,
        thumbnail_photo_url VARCHAR(255) NOT NULL,
        cover_photo_url VARCHAR(255) NOT NULL,
        cost_per_night INTEGER NOT NULL DEFAULT 0,
        parking_spaces INTEGER NOT NULL DEFAULT 0,
        number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
        number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
        country VARCHAR(255) NOT NULL,
        street VARCHAR(255) NOT NULL,
        city VARCHAR(255) NOT NULL,
        province VARCHAR(255) NOT NULL,
        post_code VARCHAR(255) NOT NULL,
        active BOOLEAN NOT NULL DEFAULT TRUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservations (
        id SERIAL PRIMARY KEY NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
        guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS property_reviews (
        id SERIAL PRIMARY KEY NOT NULL,
        guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
        reservation_id INTEGER REFERENCES reservations(id) ON DELETE CASCADE,
        rating SMALLINT NOT NULL DEFAULT 0,
        message TEXT
    )
    "#,
];

/// Connect to `DATABASE_URL` and make sure the four tables exist.
pub async fn setup() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");

    let mut tx = pool.begin().await.expect("begin failed");
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK)
        .execute(&mut *tx)
        .await
        .expect("schema lock failed");
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .expect("schema creation failed");
    }
    tx.commit().await.expect("commit failed");

    Database::from_pool(pool)
}

/// A short token to keep fixture values apart between tests.
pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

pub async fn insert_user(db: &Database) -> User {
    let tag = unique("guest");
    db.users()
        .create(&NewUser {
            name: format!("Test {}", tag),
            email: format!("{}@example.com", tag),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".into(),
        })
        .await
        .expect("create user failed")
}

pub fn new_property(owner_id: i32, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("Stay in {}", city),
        description: Some("description".into()),
        thumbnail_photo_url: "https://images.pexels.com/photos/2086676/thumb.jpeg".into(),
        cover_photo_url: "https://images.pexels.com/photos/2086676/cover.jpeg".into(),
        cost_per_night,
        parking_spaces: 2,
        number_of_bathrooms: 1,
        number_of_bedrooms: 3,
        country: "Canada".into(),
        street: "651 Nami Road".into(),
        city: city.to_owned(),
        province: "British Columbia".into(),
        post_code: "83680".into(),
    }
}

pub async fn add_review(db: &Database, guest_id: i32, property_id: i32, rating: i16) {
    sqlx::query(
        "INSERT INTO property_reviews (guest_id, property_id, rating) VALUES ($1, $2, $3)",
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(rating)
    .execute(db.pool())
    .await
    .expect("insert review failed");
}

pub async fn add_reservation(
    db: &Database,
    guest_id: i32,
    property_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Reservation {
    sqlx::query_as::<_, Reservation>(
        r#"
        INSERT INTO reservations (guest_id, property_id, start_date, end_date)
        VALUES ($1, $2, $3, $4)
        RETURNING id, guest_id, property_id, start_date, end_date
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(db.pool())
    .await
    .expect("insert reservation failed")
}

/// The server's idea of today, which is what `now()::date` compares against.
pub async fn server_today(db: &Database) -> NaiveDate {
    let (today,): (NaiveDate,) = sqlx::query_as("SELECT CURRENT_DATE")
        .fetch_one(db.pool())
        .await
        .expect("current date query failed");
    today
}
