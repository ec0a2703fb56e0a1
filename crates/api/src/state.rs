//! Shared handler state.

use std::sync::Arc;

use luncher_db::{
    Client, ClientError, Offers, OffersCollection, Restaurants, RestaurantsCollection, Users,
    UsersCollection,
};

/// Collections and client shared by every request.
///
/// Collections are held behind their capability traits so handlers can be
/// tested against in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<Client>,
    pub offers: Arc<dyn Offers>,
    pub users: Arc<dyn Users>,
    pub restaurants: Arc<dyn Restaurants>,
}

impl AppState {
    /// Bind every collection to a connected client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotConnected` if the client is not connected.
    pub fn from_client(client: Arc<Client>) -> Result<Self, ClientError> {
        Ok(Self {
            offers: Arc::new(OffersCollection::new(&client)?),
            users: Arc::new(UsersCollection::new(&client)?),
            restaurants: Arc::new(RestaurantsCollection::new(&client)?),
            client,
        })
    }
}
