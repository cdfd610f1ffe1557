// Use cases layer: one workflow per user action, with the API and session
// storage injected.

pub mod create_records;
pub mod dashboard;
pub mod log_in;
pub mod logout;
pub mod sign_up;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_records::{CreateCelebrationUseCase, CreateWishlistUseCase};
pub use dashboard::{DashboardData, LoadDashboardUseCase};
pub use log_in::LogInUseCase;
pub use logout::LogoutUseCase;
pub use sign_up::SignUpUseCase;
