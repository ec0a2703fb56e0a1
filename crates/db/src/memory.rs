//! In-memory collections.
//!
//! Each fake keeps its documents in a mutex-guarded `Vec` and honours the
//! same contract as its `PostgreSQL` counterpart: batch inserts are atomic,
//! unique names are enforced and IDs are assigned on insert. Used to test
//! handlers and commands without a running store.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use luncher_core::{
    Offer, OfferId, Region, RegionId, Restaurant, RestaurantId, Tag, TagId, User, UserId,
    UserSession,
};

use crate::error::RepositoryError;
use crate::offers::{Offers, validate_all};
use crate::regions::Regions;
use crate::restaurants::Restaurants;
use crate::tags::Tags;
use crate::users::Users;

/// Reject a batch if any key repeats within it or is already stored.
fn check_unique<'a>(
    existing: impl Iterator<Item = &'a str>,
    incoming: impl Iterator<Item = &'a str>,
    noun: &str,
) -> Result<(), RepositoryError> {
    let mut seen: HashSet<&str> = existing.collect();
    for key in incoming {
        if !seen.insert(key) {
            return Err(RepositoryError::Conflict(format!("{noun} already exists")));
        }
    }
    Ok(())
}

/// In-memory [`Regions`].
#[derive(Debug, Default)]
pub struct MemoryRegions {
    docs: Mutex<Vec<Region>>,
}

impl MemoryRegions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already stored regions. IDs are kept as given.
    #[must_use]
    pub fn with(regions: Vec<Region>) -> Self {
        Self {
            docs: Mutex::new(regions),
        }
    }
}

#[async_trait]
impl Regions for MemoryRegions {
    async fn insert_many(&self, regions: Vec<Region>) -> Result<Vec<Region>, RepositoryError> {
        let mut docs = self.docs.lock().await;
        check_unique(
            docs.iter().map(|r| r.name.as_str()),
            regions.iter().map(|r| r.name.as_str()),
            "region",
        )?;

        let inserted: Vec<Region> = regions
            .into_iter()
            .map(|mut r| {
                r.id = Some(RegionId::generate());
                r
            })
            .collect();
        docs.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn get(&self, name: &str) -> Result<Region, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        Ok(self.docs.lock().await.iter().any(|r| r.name == name))
    }

    async fn list(&self) -> Result<Vec<Region>, RepositoryError> {
        let mut regions = self.docs.lock().await.clone();
        regions.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(regions)
    }
}

/// In-memory [`Restaurants`].
#[derive(Debug, Default)]
pub struct MemoryRestaurants {
    docs: Mutex<Vec<Restaurant>>,
}

impl MemoryRestaurants {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already stored restaurants. IDs are kept as given.
    #[must_use]
    pub fn with(restaurants: Vec<Restaurant>) -> Self {
        Self {
            docs: Mutex::new(restaurants),
        }
    }
}

#[async_trait]
impl Restaurants for MemoryRestaurants {
    async fn insert_many(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let mut docs = self.docs.lock().await;
        check_unique(
            docs.iter().map(|r| r.name.as_str()),
            restaurants.iter().map(|r| r.name.as_str()),
            "restaurant",
        )?;

        let inserted: Vec<Restaurant> = restaurants
            .into_iter()
            .map(|mut r| {
                r.id = Some(RestaurantId::generate());
                r
            })
            .collect();
        docs.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn get(&self, name: &str) -> Result<Restaurant, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_id(&self, id: RestaurantId) -> Result<Restaurant, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn exists(&self, name: &str) -> Result<bool, RepositoryError> {
        Ok(self.docs.lock().await.iter().any(|r| r.name == name))
    }
}

/// In-memory [`Users`].
#[derive(Debug, Default)]
pub struct MemoryUsers {
    docs: Mutex<Vec<User>>,
}

impl MemoryUsers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already stored users. IDs are kept as given.
    #[must_use]
    pub fn with(users: Vec<User>) -> Self {
        Self {
            docs: Mutex::new(users),
        }
    }

    /// Snapshot of every stored user.
    pub async fn all(&self) -> Vec<User> {
        self.docs.lock().await.clone()
    }
}

#[async_trait]
impl Users for MemoryUsers {
    async fn insert_many(&self, users: Vec<User>) -> Result<Vec<User>, RepositoryError> {
        let inserted: Vec<User> = users
            .into_iter()
            .map(|mut u| {
                u.id = Some(UserId::generate());
                u
            })
            .collect();
        self.docs.lock().await.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn get_by_session_id(&self, session_id: &str) -> Result<User, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|u| u.session_id() == Some(session_id))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_facebook_user_id(
        &self,
        facebook_user_id: &str,
    ) -> Result<User, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|u| u.facebook_user_id == facebook_user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn set_session_id(
        &self,
        facebook_user_id: &str,
        session_id: &str,
    ) -> Result<(), RepositoryError> {
        let mut docs = self.docs.lock().await;
        let mut updated = false;
        for user in docs
            .iter_mut()
            .filter(|u| u.facebook_user_id == facebook_user_id)
        {
            user.session = Some(UserSession {
                id: session_id.to_owned(),
            });
            updated = true;
        }

        if updated {
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }
}

/// In-memory [`Offers`].
#[derive(Debug, Default)]
pub struct MemoryOffers {
    docs: Mutex<Vec<Offer>>,
}

impl MemoryOffers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already stored offers. IDs are kept as given.
    #[must_use]
    pub fn with(offers: Vec<Offer>) -> Self {
        Self {
            docs: Mutex::new(offers),
        }
    }
}

#[async_trait]
impl Offers for MemoryOffers {
    async fn insert_many(&self, offers: Vec<Offer>) -> Result<Vec<Offer>, RepositoryError> {
        validate_all(&offers)?;

        let inserted: Vec<Offer> = offers
            .into_iter()
            .map(|mut o| {
                o.id = Some(OfferId::generate());
                o
            })
            .collect();
        self.docs.lock().await.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn get(&self, id: OfferId) -> Result<Offer, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|o| o.id == Some(id))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_for_time_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Offer>, RepositoryError> {
        let mut offers: Vec<Offer> = self
            .docs
            .lock()
            .await
            .iter()
            .filter(|o| o.intersects(start, end))
            .cloned()
            .collect();
        offers.sort_by(|a, b| a.from_time.cmp(&b.from_time).then(a.id.cmp(&b.id)));
        Ok(offers)
    }
}

/// In-memory [`Tags`].
#[derive(Debug, Default)]
pub struct MemoryTags {
    docs: Mutex<Vec<Tag>>,
}

impl MemoryTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with already stored tags. IDs are kept as given.
    #[must_use]
    pub fn with(tags: Vec<Tag>) -> Self {
        Self {
            docs: Mutex::new(tags),
        }
    }
}

#[async_trait]
impl Tags for MemoryTags {
    async fn insert_many(&self, tags: Vec<Tag>) -> Result<Vec<Tag>, RepositoryError> {
        let mut docs = self.docs.lock().await;
        check_unique(
            docs.iter().map(|t| t.name.as_str()),
            tags.iter().map(|t| t.name.as_str()),
            "tag",
        )?;

        let inserted: Vec<Tag> = tags
            .into_iter()
            .map(|mut t| {
                t.id = Some(TagId::generate());
                t
            })
            .collect();
        docs.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn get(&self, name: &str) -> Result<Tag, RepositoryError> {
        self.docs
            .lock()
            .await
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Tag>, RepositoryError> {
        let mut tags = self.docs.lock().await.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}
