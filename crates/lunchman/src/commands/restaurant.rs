//! Restaurant commands.
//!
//! # Usage
//!
//! ```bash
//! lunchman add restaurant
//! ```

use std::io::{BufRead, Write};

use luncher_core::{Restaurant, User};
use luncher_db::{RepositoryError, Restaurants, Users};

use super::{CommandError, confirm_insertion};
use crate::checks::{NotEmpty, RestaurantNameUnique};
use crate::interact::Actor;

/// Prompt for a new restaurant and its administrator and store both.
///
/// The restaurant is stored first. If storing the user then fails the
/// restaurant stays in place and `CommandError::UserInsert` is returned.
///
/// # Errors
///
/// Returns `CommandError::Actor` if the dialogue is canceled,
/// `CommandError::Aborted` if the insertion is declined,
/// `CommandError::Repository` if storing the restaurant fails and
/// `CommandError::UserInsert` if storing the user fails.
pub async fn add<R, W>(
    actor: &mut Actor<R, W>,
    restaurants: &dyn Restaurants,
    users: &dyn Users,
) -> Result<(Restaurant, User), CommandError>
where
    R: BufRead + Send,
    W: Write + Send,
{
    let name = actor
        .get_input_and_retry(
            "Please enter a name for the new restaurant",
            &[&NotEmpty, &RestaurantNameUnique(restaurants)],
        )
        .await?;
    let address = actor
        .get_input_and_retry("Please enter the restaurant's address", &[&NotEmpty])
        .await?;
    let facebook_user_id = actor
        .get_input_and_retry(
            "Please enter the restaurant administrator's Facebook user ID",
            &[&NotEmpty],
        )
        .await?;
    let facebook_page_id = actor
        .get_input_and_retry("Please enter the restaurant's Facebook page ID", &[&NotEmpty])
        .await?;

    let restaurant = Restaurant::new(name, address);
    confirm_insertion(actor, &restaurant)?;

    let restaurant = restaurants.insert(restaurant).await?;
    let restaurant_id = restaurant.id.ok_or_else(|| {
        RepositoryError::DataCorruption("stored restaurant has no ID".to_owned())
    })?;
    tracing::info!(name = %restaurant.name, id = %restaurant_id, "Restaurant added");

    let user = User::new(restaurant_id, facebook_user_id, facebook_page_id);
    let user = match users.insert(user).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(restaurant_id = %restaurant_id, error = %e, "User insert failed after restaurant insert");
            return Err(CommandError::UserInsert(e));
        }
    };

    actor.say("Restaurant (and user) successfully added!")?;
    Ok((restaurant, user))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use async_trait::async_trait;
    use luncher_db::memory::{MemoryRestaurants, MemoryUsers};

    use super::*;
    use crate::commands::PARTIAL_INSERT_WARNING;
    use crate::interact::InputCheck;

    const INPUT: &str = "Cafe X\nMain St 1\nfb-user\nfb-page\n\n";

    fn actor(input: &str) -> Actor<Cursor<Vec<u8>>, Vec<u8>> {
        Actor::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    struct FailingUsers;

    #[async_trait]
    impl Users for FailingUsers {
        async fn insert_many(&self, _: Vec<User>) -> Result<Vec<User>, RepositoryError> {
            Err(RepositoryError::Conflict("user already exists".to_owned()))
        }

        async fn get_by_session_id(&self, _: &str) -> Result<User, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn get_by_facebook_user_id(&self, _: &str) -> Result<User, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn set_session_id(&self, _: &str, _: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    #[tokio::test]
    async fn test_add_restaurant_and_user() {
        let restaurants = MemoryRestaurants::new();
        let users = MemoryUsers::new();
        let mut actor = actor(INPUT);

        let (restaurant, user) = add(&mut actor, &restaurants, &users).await.unwrap();
        assert_eq!(user.restaurant_id, restaurant.id.unwrap());
        assert_eq!(
            users.get_by_facebook_user_id("fb-user").await.unwrap(),
            user
        );

        let out = String::from_utf8(actor.into_writer()).unwrap();
        assert!(out.ends_with("Restaurant (and user) successfully added!\n"));

        let err = RestaurantNameUnique(&restaurants)
            .check("Cafe X")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_user_failure_keeps_restaurant_and_warns() {
        let restaurants = MemoryRestaurants::new();
        let mut actor = actor(INPUT);

        let err = add(&mut actor, &restaurants, &FailingUsers)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::UserInsert(_)));
        assert!(err.to_string().ends_with(PARTIAL_INSERT_WARNING));
        assert!(restaurants.exists("Cafe X").await.unwrap());
    }

    #[tokio::test]
    async fn test_declined_stores_nothing() {
        let restaurants = MemoryRestaurants::new();
        let users = MemoryUsers::new();
        let mut actor = actor("Cafe X\nMain St 1\nfb-user\nfb-page\nno\n");

        let result = add(&mut actor, &restaurants, &users).await;
        assert!(matches!(result, Err(CommandError::Aborted)));
        assert!(!restaurants.exists("Cafe X").await.unwrap());
        assert!(users.all().await.is_empty());
    }
}
