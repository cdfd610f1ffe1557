use crate::domain::entities::{Celebration, Wishlist};
use crate::domain::errors::{ApiError, SessionError};
use crate::domain::ports::{SessionStore, WishlistApi};

// Both dashboard lists; each resolves independently of the other.
#[derive(Debug)]
pub struct DashboardData {
    pub wishlists: Result<Vec<Wishlist>, ApiError>,
    pub celebrations: Result<Vec<Celebration>, ApiError>,
}

// Dashboard load use case with injected dependencies.
pub struct LoadDashboardUseCase<A, S> {
    pub api: A,
    pub session: S,
}

impl<A, S> LoadDashboardUseCase<A, S>
where
    A: WishlistApi,
    S: SessionStore,
{
    pub async fn execute(&self) -> Result<DashboardData, SessionError> {
        // An absent token is sent as an empty bearer value.
        let token = self.session.read()?.unwrap_or_default();

        let (wishlists, celebrations) = tokio::join!(
            self.api.list_wishlists(&token),
            self.api.list_celebrations(&token)
        );

        Ok(DashboardData {
            wishlists,
            celebrations,
        })
    }
}
