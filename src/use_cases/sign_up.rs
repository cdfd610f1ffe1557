use crate::domain::entities::{Credentials, SignUpResponse};
use crate::domain::errors::ApiError;
use crate::domain::ports::WishlistApi;

// Sign-up use case with injected dependencies.
pub struct SignUpUseCase<A> {
    pub api: A,
}

impl<A> SignUpUseCase<A>
where
    A: WishlistApi,
{
    pub async fn execute(&self, credentials: Credentials) -> Result<SignUpResponse, ApiError> {
        self.api.sign_up(&credentials).await
    }
}
