use crate::domain::entities::{Celebration, NewCelebration, NewWishlist, Wishlist};
use crate::domain::errors::FlowError;
use crate::domain::ports::{SessionStore, WishlistApi};

// Create-wishlist use case with injected dependencies.
pub struct CreateWishlistUseCase<A, S> {
    pub api: A,
    pub session: S,
}

impl<A, S> CreateWishlistUseCase<A, S>
where
    A: WishlistApi,
    S: SessionStore,
{
    pub async fn execute(&self, wishlist: NewWishlist) -> Result<Wishlist, FlowError> {
        let token = self.session.read()?.unwrap_or_default();
        Ok(self.api.create_wishlist(&token, &wishlist).await?)
    }
}

// Create-celebration use case with injected dependencies.
pub struct CreateCelebrationUseCase<A, S> {
    pub api: A,
    pub session: S,
}

impl<A, S> CreateCelebrationUseCase<A, S>
where
    A: WishlistApi,
    S: SessionStore,
{
    pub async fn execute(&self, celebration: NewCelebration) -> Result<Celebration, FlowError> {
        let token = self.session.read()?.unwrap_or_default();
        Ok(self.api.create_celebration(&token, &celebration).await?)
    }
}
