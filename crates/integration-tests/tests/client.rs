//! Client lifecycle against a live store.

#![allow(clippy::unwrap_used)]

use luncher_core::{Location, Region};
use luncher_db::{Client, ClientError, Config, Regions, RegionsCollection};
use luncher_integration_tests::TestDb;

#[tokio::test]
async fn test_wipe_db_without_connection_fails() {
    let client = Client::new(Config::new("postgres://localhost:5432", "luncher_test"));
    assert!(matches!(
        client.wipe_db().await,
        Err(ClientError::NotConnected)
    ));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_connect_twice_is_rejected() {
    let mut db = TestDb::new().await.unwrap();

    assert!(db.client.is_connected());
    assert!(matches!(
        db.client.connect().await,
        Err(ClientError::AlreadyConnected)
    ));
    db.client.ping().await.unwrap();

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_second_client_sees_schema_and_documents() {
    let db = TestDb::new().await.unwrap();
    RegionsCollection::new(&db.client)
        .unwrap()
        .insert(Region::new(
            "Tallinn".to_owned(),
            Location::parse("Europe/Tallinn").unwrap(),
        ))
        .await
        .unwrap();

    let mut other = db.new_client();
    other.connect().await.unwrap();
    assert!(
        RegionsCollection::new(&other)
            .unwrap()
            .exists("Tallinn")
            .await
            .unwrap()
    );
    other.disconnect().await;

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_wipe_db_empties_collections() {
    let db = TestDb::new().await.unwrap();
    let regions = RegionsCollection::new(&db.client).unwrap();
    regions
        .insert(Region::new(
            "Tallinn".to_owned(),
            Location::parse("Europe/Tallinn").unwrap(),
        ))
        .await
        .unwrap();

    db.client.wipe_db().await.unwrap();
    assert!(regions.list().await.unwrap().is_empty());

    db.teardown().await.unwrap();
}
