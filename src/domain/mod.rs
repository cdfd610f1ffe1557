// Domain layer: records exchanged with the wishlist API and the ports the
// use cases depend on.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{
    Celebration, Credentials, LoginResponse, NewCelebration, NewWishlist, SignUpResponse,
    Wishlist,
};
pub use errors::{ApiError, FlowError, SessionError};
pub use ports::{SessionStore, WishlistApi};
