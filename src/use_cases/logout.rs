use crate::domain::errors::SessionError;
use crate::domain::ports::SessionStore;

// Logout use case with injected dependencies.
pub struct LogoutUseCase<S> {
    pub session: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn execute(&self) -> Result<(), SessionError> {
        self.session.clear()
    }
}
