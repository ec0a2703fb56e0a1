//! Regions collection against a live store.

#![allow(clippy::unwrap_used)]

use luncher_core::{Location, Region};
use luncher_db::{Regions, RegionsCollection, RepositoryError};
use luncher_integration_tests::TestDb;

fn region(name: &str, location: &str) -> Region {
    Region::new(name.to_owned(), Location::parse(location).unwrap())
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_insert_then_get_round_trips() {
    let db = TestDb::new().await.unwrap();
    let regions = RegionsCollection::new(&db.client).unwrap();

    for (name, location) in [
        ("Tallinn", "Europe/Tallinn"),
        ("New-York", "America/New_York"),
        ("Utc", "UTC"),
    ] {
        let inserted = regions.insert(region(name, location)).await.unwrap();
        assert!(inserted.id.is_some());
        assert_eq!(regions.get(name).await.unwrap(), inserted);
    }

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_get_missing_is_not_found() {
    let db = TestDb::new().await.unwrap();
    let regions = RegionsCollection::new(&db.client).unwrap();

    let err = regions.get("Atlantis").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_exists_flips_after_insert() {
    let db = TestDb::new().await.unwrap();
    let regions = RegionsCollection::new(&db.client).unwrap();

    assert!(!regions.exists("Tartu").await.unwrap());
    regions.insert(region("Tartu", "Europe/Tallinn")).await.unwrap();
    assert!(regions.exists("Tartu").await.unwrap());

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_duplicate_name_conflicts_and_batch_is_atomic() {
    let db = TestDb::new().await.unwrap();
    let regions = RegionsCollection::new(&db.client).unwrap();

    regions.insert(region("Tallinn", "Europe/Tallinn")).await.unwrap();
    let err = regions
        .insert_many(vec![
            region("Narva", "Europe/Tallinn"),
            region("Tallinn", "Europe/Tallinn"),
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));
    assert!(!regions.exists("Narva").await.unwrap());

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_list_sorted_by_name() {
    let db = TestDb::new().await.unwrap();
    let regions = RegionsCollection::new(&db.client).unwrap();

    regions
        .insert_many(vec![
            region("Tartu", "Europe/Tallinn"),
            region("Helsinki", "Europe/Helsinki"),
        ])
        .await
        .unwrap();
    let names: Vec<String> = regions
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Helsinki", "Tartu"]);

    db.teardown().await.unwrap();
}
