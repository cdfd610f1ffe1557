use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::domain::entities::{
    Celebration, Credentials, LoginResponse, NewCelebration, NewWishlist, SignUpResponse,
    Wishlist,
};
use crate::domain::errors::{ApiError, SessionError};
use crate::domain::ports::{SessionStore, WishlistApi};

// Calls observed by the fake API, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiCall {
    SignUp(Credentials),
    LogIn(Credentials),
    ListWishlists { token: String },
    ListCelebrations { token: String },
    CreateWishlist { token: String, name: String },
    CreateCelebration { token: String, title: String, date: String },
}

struct Script {
    sign_up: Result<SignUpResponse, ApiError>,
    log_in: Result<LoginResponse, ApiError>,
    wishlists: Result<Vec<Wishlist>, ApiError>,
    celebrations: Result<Vec<Celebration>, ApiError>,
    // When set, authenticated calls carrying any other token are rejected.
    accepted_token: Option<String>,
    fail_creates: bool,
    calls: Vec<ApiCall>,
}

impl Script {
    fn authorized(&self, token: &str) -> bool {
        self.accepted_token
            .as_deref()
            .is_none_or(|accepted| accepted == token)
    }
}

// Scripted in-memory API. Clones share the same script and call log.
#[derive(Clone)]
pub(crate) struct RecordingApi {
    script: Arc<Mutex<Script>>,
    // Both list calls wait here, so a sequential caller would never finish.
    rendezvous: Option<Arc<Barrier>>,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                sign_up: Ok(SignUpResponse::default()),
                log_in: Ok(LoginResponse {
                    access_token: "token-1".to_string(),
                    token_type: "bearer".to_string(),
                }),
                wishlists: Ok(Vec::new()),
                celebrations: Ok(Vec::new()),
                accepted_token: None,
                fail_creates: false,
                calls: Vec::new(),
            })),
            rendezvous: None,
        }
    }

    pub(crate) fn with_sign_up(self, result: Result<SignUpResponse, ApiError>) -> Self {
        self.script().sign_up = result;
        self
    }

    pub(crate) fn with_log_in(self, result: Result<LoginResponse, ApiError>) -> Self {
        self.script().log_in = result;
        self
    }

    pub(crate) fn with_wishlists(self, result: Result<Vec<Wishlist>, ApiError>) -> Self {
        self.script().wishlists = result;
        self
    }

    pub(crate) fn with_celebrations(self, result: Result<Vec<Celebration>, ApiError>) -> Self {
        self.script().celebrations = result;
        self
    }

    pub(crate) fn accepting_token(self, token: &str) -> Self {
        self.script().accepted_token = Some(token.to_string());
        self
    }

    pub(crate) fn failing_creates(self) -> Self {
        self.script().fail_creates = true;
        self
    }

    pub(crate) fn with_rendezvous(mut self) -> Self {
        self.rendezvous = Some(Arc::new(Barrier::new(2)));
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.script().calls.clone()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("script mutex poisoned")
    }

    async fn meet(&self) {
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl WishlistApi for RecordingApi {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::SignUp(credentials.clone()));
        script.sign_up.clone()
    }

    async fn log_in(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::LogIn(credentials.clone()));
        script.log_in.clone()
    }

    async fn list_wishlists(&self, token: &str) -> Result<Vec<Wishlist>, ApiError> {
        self.script().calls.push(ApiCall::ListWishlists {
            token: token.to_string(),
        });
        self.meet().await;

        let script = self.script();
        if !script.authorized(token) {
            return Err(ApiError::WishlistsUnavailable);
        }
        script.wishlists.clone()
    }

    async fn list_celebrations(&self, token: &str) -> Result<Vec<Celebration>, ApiError> {
        self.script().calls.push(ApiCall::ListCelebrations {
            token: token.to_string(),
        });
        self.meet().await;

        let script = self.script();
        if !script.authorized(token) {
            return Err(ApiError::CelebrationsUnavailable);
        }
        script.celebrations.clone()
    }

    async fn create_wishlist(
        &self,
        token: &str,
        wishlist: &NewWishlist,
    ) -> Result<Wishlist, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::CreateWishlist {
            token: token.to_string(),
            name: wishlist.name.clone(),
        });
        if script.fail_creates || !script.authorized(token) {
            return Err(ApiError::WishlistNotCreated);
        }

        let Ok(wishlists) = script.wishlists.as_mut() else {
            return Err(ApiError::WishlistNotCreated);
        };
        let created = Wishlist {
            id: Some(wishlists.len() as i64 + 1),
            name: wishlist.name.clone(),
        };
        wishlists.push(created.clone());
        Ok(created)
    }

    async fn create_celebration(
        &self,
        token: &str,
        celebration: &NewCelebration,
    ) -> Result<Celebration, ApiError> {
        let mut script = self.script();
        script.calls.push(ApiCall::CreateCelebration {
            token: token.to_string(),
            title: celebration.title.clone(),
            date: celebration.date.clone(),
        });
        if script.fail_creates || !script.authorized(token) {
            return Err(ApiError::CelebrationNotCreated);
        }

        let Ok(celebrations) = script.celebrations.as_mut() else {
            return Err(ApiError::CelebrationNotCreated);
        };
        let created = Celebration {
            id: Some(celebrations.len() as i64 + 1),
            title: celebration.title.clone(),
            date: celebration.date.clone(),
        };
        celebrations.push(created.clone());
        Ok(created)
    }
}

// Session store whose every operation fails, for error-path tests.
#[derive(Clone, Copy)]
pub(crate) struct FailingSessionStore;

impl SessionStore for FailingSessionStore {
    fn save(&self, _token: &str) -> Result<(), SessionError> {
        Err(SessionError::Unavailable)
    }

    fn read(&self) -> Result<Option<String>, SessionError> {
        Err(SessionError::Unavailable)
    }

    fn clear(&self) -> Result<(), SessionError> {
        Err(SessionError::Unavailable)
    }
}
