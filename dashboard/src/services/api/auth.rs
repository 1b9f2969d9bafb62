//! # Authentication Endpoints
//!
//! `POST /auth/token` takes the credentials as an OAuth2 password form, so the
//! body is form-encoded rather than JSON.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use shared::{LoginForm, TokenResponse};

use super::client::ApiClient;
use super::error::ApiError;
use super::request::ApiRequest;

pub const TOKEN_PATH: &str = "/auth/token";

/// Request descriptor for a login attempt.
pub fn login_request(form: &LoginForm) -> ApiRequest {
    ApiRequest::post_form(
        TOKEN_PATH,
        [
            ("username", form.username.as_str()),
            ("password", form.password.as_str()),
        ],
    )
    .with_header(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    )
}

/// Exchange username and password for a bearer token.
#[tracing::instrument(skip(client, password))]
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<TokenResponse, ApiError> {
    tracing::info!("Attempting login");

    let form = LoginForm { username, password };
    let token = client
        .fetch_json::<TokenResponse>(login_request(&form))
        .await?;

    tracing::info!(role = %token.role, "Login successful");
    Ok(token)
}
