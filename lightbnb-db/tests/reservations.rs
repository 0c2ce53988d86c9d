//! Guest reservation listing against a live database

mod common;

use chrono::Duration;
use lightbnb_db::DEFAULT_LIMIT;

#[tokio::test]
#[ignore = "requires database"]
async fn lists_past_stays_oldest_first_with_ratings() {
    let db = common::setup().await;
    let owner = common::insert_user(&db).await;
    let guest = common::insert_user(&db).await;
    let today = common::server_today(&db).await;

    let lakeside = db
        .properties()
        .create(&common::new_property(owner.id, &common::unique("Kelowna"), 150))
        .await
        .unwrap();
    let downtown = db
        .properties()
        .create(&common::new_property(owner.id, &common::unique("Kelowna"), 90))
        .await
        .unwrap();
    common::add_review(&db, owner.id, lakeside.id, 4).await;
    common::add_review(&db, owner.id, lakeside.id, 5).await;
    common::add_review(&db, owner.id, downtown.id, 3).await;

    let recent = common::add_reservation(
        &db,
        guest.id,
        downtown.id,
        today - Duration::days(30),
        today - Duration::days(25),
    )
    .await;
    let oldest = common::add_reservation(
        &db,
        guest.id,
        lakeside.id,
        today - Duration::days(60),
        today - Duration::days(55),
    )
    .await;
    // Ends today: not yet completed
    common::add_reservation(&db, guest.id, lakeside.id, today - Duration::days(3), today).await;
    common::add_reservation(
        &db,
        guest.id,
        lakeside.id,
        today + Duration::days(5),
        today + Duration::days(10),
    )
    .await;

    let stays = db
        .reservations()
        .list_for_guest(guest.id, DEFAULT_LIMIT)
        .await
        .unwrap();

    assert_eq!(stays.len(), 2);
    assert_eq!(stays[0].reservation, oldest);
    assert_eq!(stays[0].property, lakeside);
    assert_eq!(stays[0].average_rating, Some(4.5));
    assert_eq!(stays[1].reservation, recent);
    assert_eq!(stays[1].property, downtown);
    assert_eq!(stays[1].average_rating, Some(3.0));
    assert!(stays.iter().all(|s| s.reservation.end_date < today));
}

#[tokio::test]
#[ignore = "requires database"]
async fn limit_is_honoured() {
    let db = common::setup().await;
    let owner = common::insert_user(&db).await;
    let guest = common::insert_user(&db).await;
    let today = common::server_today(&db).await;

    let property = db
        .properties()
        .create(&common::new_property(owner.id, &common::unique("Banff"), 200))
        .await
        .unwrap();
    common::add_review(&db, owner.id, property.id, 5).await;

    for weeks_ago in [4, 3, 2] {
        let start = today - Duration::weeks(weeks_ago);
        common::add_reservation(&db, guest.id, property.id, start, start + Duration::days(2)).await;
    }

    let stays = db.reservations().list_for_guest(guest.id, 2).await.unwrap();
    assert_eq!(stays.len(), 2);
    assert!(stays[0].reservation.start_date < stays[1].reservation.start_date);
    assert_eq!(stays[0].reservation.start_date, today - Duration::weeks(4));
}

#[tokio::test]
#[ignore = "requires database"]
async fn guest_without_stays_gets_empty_list() {
    let db = common::setup().await;
    let guest = common::insert_user(&db).await;

    let stays = db
        .reservations()
        .list_for_guest(guest.id, DEFAULT_LIMIT)
        .await
        .unwrap();
    assert!(stays.is_empty());
}
