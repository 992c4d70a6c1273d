//! Session endpoints. The backend issues an httpOnly session cookie on
//! login/signup; the client's cookie store carries it from there.

use reqwest::Method;
use serde_json::json;

use super::types::{SignupRequest, User};
use crate::http::{HttpClient, HttpError, RequestOptions};

pub struct Auth {
    http: HttpClient,
}

impl Auth {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the currently authenticated user, or a 401 protocol error
    /// when no session is active.
    #[tracing::instrument(skip(self))]
    pub async fn me(&self) -> Result<User, HttpError> {
        self.http.get_json("/auth/me").await
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, HttpError> {
        self.http
            .post_json("/auth/login", &json!({"email": email, "password": password}))
            .await
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, HttpError> {
        self.http.post_json("/auth/signup", request).await
    }

    /// Ends the session. The backend answers with an empty body.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), HttpError> {
        self.http
            .request_value(Method::POST, "/auth/logout", None, &RequestOptions::default())
            .await?;
        Ok(())
    }
}
