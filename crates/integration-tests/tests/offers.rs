//! Offers collection against a live store.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};
use luncher_core::{Offer, OfferRestaurant, Price};
use luncher_db::{Offers, OffersCollection, RepositoryError};
use luncher_integration_tests::TestDb;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, hour, 0, 0).unwrap()
}

fn offer(title: &str, from: u32, to: u32) -> Offer {
    Offer {
        id: None,
        restaurant: OfferRestaurant {
            name: "Bistro".to_owned(),
        },
        title: title.to_owned(),
        from_time: at(from),
        to_time: at(to),
        description: "Daily special".to_owned(),
        price: Price::new(550),
        tags: vec!["soup".to_owned()],
    }
}

fn titles(offers: Vec<Offer>) -> Vec<String> {
    offers.into_iter().map(|o| o.title).collect()
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_time_range_includes_exactly_intersecting_offers() {
    let db = TestDb::new().await.unwrap();
    let offers = OffersCollection::new(&db.client).unwrap();

    offers
        .insert_many(vec![
            offer("ends-at-start", 8, 10),
            offer("overlaps-start", 9, 11),
            offer("inside", 11, 12),
            offer("overlaps-end", 13, 15),
            offer("starts-at-end", 14, 16),
            offer("covers", 6, 20),
        ])
        .await
        .unwrap();

    let found = offers.get_for_time_range(at(10), at(14)).await.unwrap();
    assert_eq!(
        titles(found),
        ["covers", "overlaps-start", "inside", "overlaps-end"]
    );

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_get_by_id_round_trips() {
    let db = TestDb::new().await.unwrap();
    let offers = OffersCollection::new(&db.client).unwrap();

    let inserted = offers.insert(offer("soup", 11, 14)).await.unwrap();
    assert_eq!(offers.get(inserted.id.unwrap()).await.unwrap(), inserted);

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_inverted_offer_is_not_stored() {
    let db = TestDb::new().await.unwrap();
    let offers = OffersCollection::new(&db.client).unwrap();

    let err = offers
        .insert_many(vec![offer("ok", 11, 12), offer("inverted", 14, 12)])
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidDocument(_)));
    assert!(
        offers
            .get_for_time_range(at(0), at(23))
            .await
            .unwrap()
            .is_empty()
    );

    db.teardown().await.unwrap();
}
