//! Tags, offer group posts and registration tokens against a live store.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use luncher_core::{OfferGroupPost, RegistrationAccessToken, RestaurantId, Tag};
use luncher_db::{
    OfferGroupPosts, OfferGroupPostsCollection, RegistrationAccessTokens,
    RegistrationAccessTokensCollection, RepositoryError, Tags, TagsCollection,
};
use luncher_integration_tests::TestDb;

fn tag(name: &str, display_name: &str) -> Tag {
    Tag {
        id: None,
        name: name.to_owned(),
        display_name: display_name.to_owned(),
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_tags() {
    let db = TestDb::new().await.unwrap();
    let tags = TagsCollection::new(&db.client).unwrap();

    tags.insert_many(vec![tag("vegan", "Vegan"), tag("soup", "Soup")])
        .await
        .unwrap();
    assert_eq!(tags.get("soup").await.unwrap().display_name, "Soup");
    assert!(matches!(
        tags.insert(tag("soup", "Soups")).await,
        Err(RepositoryError::Conflict(_))
    ));

    let names: Vec<String> = tags.list().await.unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["soup", "vegan"]);

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_offer_group_post_by_date() {
    let db = TestDb::new().await.unwrap();
    let posts = OfferGroupPostsCollection::new(&db.client).unwrap();

    let restaurant_id = RestaurantId::generate();
    let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let post = posts
        .insert(OfferGroupPost {
            id: None,
            restaurant_id,
            date,
            message_template: "Today: {offers}".to_owned(),
            facebook_post_id: None,
        })
        .await
        .unwrap();

    assert_eq!(posts.get_by_date(restaurant_id, date).await.unwrap(), post);
    let next_day = date.succ_opt().unwrap();
    assert!(
        posts
            .get_by_date(restaurant_id, next_day)
            .await
            .unwrap_err()
            .is_not_found()
    );

    db.teardown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires PostgreSQL (LUNCHER_TEST_DB_URL)"]
async fn test_registration_access_tokens() {
    let db = TestDb::new().await.unwrap();
    let tokens = RegistrationAccessTokensCollection::new(&db.client).unwrap();

    let token = RegistrationAccessToken::generate();
    assert!(!tokens.exists(&token.token).await.unwrap());
    tokens.insert(token.clone()).await.unwrap();
    assert!(tokens.exists(&token.token).await.unwrap());
    assert!(matches!(
        tokens.insert(token).await,
        Err(RepositoryError::Conflict(_))
    ));

    db.teardown().await.unwrap();
}
