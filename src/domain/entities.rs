use serde::{Deserialize, Serialize};
use std::fmt;

// The serde derives here are a dependency leak into the domain, kept because
// these records are exactly the JSON bodies the API speaks.

// Username/password pair read from a sign-up or login form.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"REDACTED")
            .finish()
    }
}

// Body returned by `POST /signup`. Only success matters to the flow, so both
// fields are optional on decode.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SignUpResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

// Body returned by `POST /login`.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    // Missing tokens decode as empty and are rejected by the login flow.
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"REDACTED")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Wishlist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Celebration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
}

// Payload for `POST /wishlists`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewWishlist {
    pub name: String,
}

// Payload for `POST /celebrations`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCelebration {
    pub title: String,
    pub date: String,
}
