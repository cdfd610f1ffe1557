use crate::domain::entities::Credentials;
use crate::domain::errors::{ApiError, FlowError};
use crate::domain::ports::{SessionStore, WishlistApi};

// Login use case with injected dependencies.
pub struct LogInUseCase<A, S> {
    pub api: A,
    pub session: S,
}

impl<A, S> LogInUseCase<A, S>
where
    A: WishlistApi,
    S: SessionStore,
{
    // Stores the issued token only after a successful response carrying one.
    pub async fn execute(&self, credentials: Credentials) -> Result<(), FlowError> {
        let response = self.api.log_in(&credentials).await?;

        if response.access_token.is_empty() {
            return Err(ApiError::InvalidCredentials.into());
        }

        self.session.save(&response.access_token)?;
        Ok(())
    }
}
