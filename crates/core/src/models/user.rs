//! Restaurant administrator document.

use serde::{Deserialize, Serialize};

use crate::types::{RestaurantId, UserId};

/// A restaurant administrator, identified by their social-login identity.
///
/// `restaurant_id` is a lookup key only. Deleting a restaurant does not touch
/// its users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Restaurant this user administers.
    pub restaurant_id: RestaurantId,
    /// Facebook user ID of the administrator.
    pub facebook_user_id: String,
    /// Facebook page ID of the restaurant.
    pub facebook_page_id: String,
    /// Session established by the social-login flow, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<UserSession>,
}

/// Reference to the session a user is currently logged in with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Opaque session identifier.
    pub id: String,
}

impl User {
    /// Create a user without a session.
    #[must_use]
    pub const fn new(
        restaurant_id: RestaurantId,
        facebook_user_id: String,
        facebook_page_id: String,
    ) -> Self {
        Self {
            id: None,
            restaurant_id,
            facebook_user_id,
            facebook_page_id,
            session: None,
        }
    }

    /// Returns the session ID, if the user has one.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_document_shape() {
        let restaurant_id = RestaurantId::generate();
        let mut user = User::new(restaurant_id, "fb-user".to_owned(), "fb-page".to_owned());
        user.session = Some(UserSession {
            id: "abc".to_owned(),
        });

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "restaurantId": restaurant_id.to_string(),
                "facebookUserId": "fb-user",
                "facebookPageId": "fb-page",
                "session": { "id": "abc" },
            })
        );
    }

    #[test]
    fn test_session_is_optional() {
        let user: User = serde_json::from_value(serde_json::json!({
            "restaurantId": RestaurantId::generate().to_string(),
            "facebookUserId": "u",
            "facebookPageId": "p",
        }))
        .unwrap();
        assert_eq!(user.session_id(), None);
    }
}
