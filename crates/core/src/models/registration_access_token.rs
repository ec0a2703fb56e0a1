//! Registration access token document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::RegistrationAccessTokenId;

/// A one-off token that lets a new restaurant administrator register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationAccessToken {
    /// Store-generated ID, `None` until inserted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RegistrationAccessTokenId>,
    /// Unique token value handed to the registrant.
    pub token: String,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl RegistrationAccessToken {
    /// Issue a new random token.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            id: None,
            token: Uuid::new_v4().simple().to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_unique() {
        let a = RegistrationAccessToken::generate();
        let b = RegistrationAccessToken::generate();
        assert_ne!(a.token, b.token);
        assert_eq!(a.token.len(), 32);
    }
}
