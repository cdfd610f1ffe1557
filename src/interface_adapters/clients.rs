use crate::domain::{
    ApiError, Celebration, Credentials, LoginResponse, NewCelebration, NewWishlist,
    SignUpResponse, Wishlist, WishlistApi,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;

// Thin wrapper around reqwest for the wishlist API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

// FastAPI-style error envelope; only used for logging.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

// Why a request failed. Logged, then collapsed into the operation's ApiError.
#[derive(Debug)]
enum RequestFailure {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        detail: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Transport(err) => write!(f, "transport error: {err}"),
            RequestFailure::Upstream { status, detail } => {
                if let Some(detail) = detail {
                    write!(f, "upstream error {status}: {detail}")
                } else {
                    write!(f, "upstream error {status}")
                }
            }
            RequestFailure::Decode(err) => write!(f, "response decode error: {err}"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    SignUp,
    LogIn,
    ListWishlists,
    ListCelebrations,
    CreateWishlist,
    CreateCelebration,
}

impl Operation {
    fn path(self) -> &'static str {
        match self {
            Operation::SignUp => "/signup",
            Operation::LogIn => "/login",
            Operation::ListWishlists | Operation::CreateWishlist => "/wishlists",
            Operation::ListCelebrations | Operation::CreateCelebration => "/celebrations",
        }
    }

    fn failure(self) -> ApiError {
        match self {
            Operation::SignUp => ApiError::SignUpFailed,
            Operation::LogIn => ApiError::InvalidCredentials,
            Operation::ListWishlists => ApiError::WishlistsUnavailable,
            Operation::ListCelebrations => ApiError::CelebrationsUnavailable,
            Operation::CreateWishlist => ApiError::WishlistNotCreated,
            Operation::CreateCelebration => ApiError::CelebrationNotCreated,
        }
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    async fn send<T>(&self, operation: Operation, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        match exchange(request).await {
            Ok(body) => {
                tracing::debug!(?operation, "api request succeeded.");
                Ok(body)
            }
            Err(failure) => {
                // Detail stays in the log; callers only get the fixed message.
                tracing::error!(?operation, error = %failure, "api request failed.");
                Err(operation.failure())
            }
        }
    }
}

async fn exchange<T>(request: RequestBuilder) -> Result<T, RequestFailure>
where
    T: DeserializeOwned,
{
    let res = request.send().await.map_err(RequestFailure::Transport)?;
    let status = res.status();

    if !status.is_success() {
        let detail = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|payload| payload.detail);
        return Err(RequestFailure::Upstream { status, detail });
    }

    res.json::<T>().await.map_err(RequestFailure::Decode)
}

#[async_trait]
impl WishlistApi for ApiClient {
    #[tracing::instrument(name = "sign_up", skip_all, fields(username = %credentials.username))]
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpResponse, ApiError> {
        let operation = Operation::SignUp;
        let request = self.http.post(self.url(operation)).json(credentials);
        self.send(operation, request).await
    }

    #[tracing::instrument(name = "log_in", skip_all, fields(username = %credentials.username))]
    async fn log_in(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let operation = Operation::LogIn;
        let request = self.http.post(self.url(operation)).json(credentials);
        self.send(operation, request).await
    }

    #[tracing::instrument(name = "list_wishlists", skip_all)]
    async fn list_wishlists(&self, token: &str) -> Result<Vec<Wishlist>, ApiError> {
        let operation = Operation::ListWishlists;
        let request = self
            .http
            .get(self.url(operation))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        self.send(operation, request).await
    }

    #[tracing::instrument(name = "list_celebrations", skip_all)]
    async fn list_celebrations(&self, token: &str) -> Result<Vec<Celebration>, ApiError> {
        let operation = Operation::ListCelebrations;
        let request = self
            .http
            .get(self.url(operation))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        self.send(operation, request).await
    }

    #[tracing::instrument(name = "create_wishlist", skip_all, fields(name = %wishlist.name))]
    async fn create_wishlist(
        &self,
        token: &str,
        wishlist: &NewWishlist,
    ) -> Result<Wishlist, ApiError> {
        let operation = Operation::CreateWishlist;
        let request = self
            .http
            .post(self.url(operation))
            .bearer_auth(token)
            .json(wishlist);
        self.send(operation, request).await
    }

    #[tracing::instrument(name = "create_celebration", skip_all, fields(title = %celebration.title))]
    async fn create_celebration(
        &self,
        token: &str,
        celebration: &NewCelebration,
    ) -> Result<Celebration, ApiError> {
        let operation = Operation::CreateCelebration;
        let request = self
            .http
            .post(self.url(operation))
            .bearer_auth(token)
            .json(celebration);
        self.send(operation, request).await
    }
}
