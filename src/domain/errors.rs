use thiserror::Error;

// User-facing failure per API operation. Transport errors, non-success
// statuses and undecodable bodies all collapse into the operation's variant;
// the display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Sign-up failed. Username might be taken.")]
    SignUpFailed,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("Failed to fetch wishlists.")]
    WishlistsUnavailable,
    #[error("Failed to fetch celebrations.")]
    CelebrationsUnavailable,
    #[error("Failed to create wishlist.")]
    WishlistNotCreated,
    #[error("Failed to create celebration.")]
    CelebrationNotCreated,
}

// Failures of the persisted token storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage is malformed: {0}")]
    Malformed(String),
    #[error("session storage is unavailable")]
    Unavailable,
}

// Anything a single user action can fail with.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
