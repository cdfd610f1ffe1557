use async_trait::async_trait;

use crate::domain::entities::{
    Celebration, Credentials, LoginResponse, NewCelebration, NewWishlist, SignUpResponse,
    Wishlist,
};
use crate::domain::errors::{ApiError, SessionError};

// Port for the remote wishlist API. Use cases depend on this trait, the
// reqwest client is one implementation of it.
#[async_trait]
pub trait WishlistApi: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, ApiError>;

    async fn log_in(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    // Authenticated calls take the bearer token explicitly; an empty token is
    // still sent so the server can reject it.
    async fn list_wishlists(&self, token: &str) -> Result<Vec<Wishlist>, ApiError>;

    async fn list_celebrations(&self, token: &str) -> Result<Vec<Celebration>, ApiError>;

    async fn create_wishlist(
        &self,
        token: &str,
        wishlist: &NewWishlist,
    ) -> Result<Wishlist, ApiError>;

    async fn create_celebration(
        &self,
        token: &str,
        celebration: &NewCelebration,
    ) -> Result<Celebration, ApiError>;
}

// Port for the single persisted access token.
pub trait SessionStore: Send + Sync {
    // Overwrites any previous token.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    fn read(&self) -> Result<Option<String>, SessionError>;

    fn clear(&self) -> Result<(), SessionError>;
}
