//! Housing API over HTTP

use std::time::Duration;

use platform::http::{JsonClient, JsonResponse};
use serde_json::{Map, Value};

use crate::domain::payload::{AuthResponse, LoginCredentials, ProfileUpdate, RegistrationData};
use crate::domain::repository::{AuthApi, ProfileFetch};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";
const PROFILE_PATH: &str = "users/profile";

const UNAUTHORIZED: u16 = 401;

/// `AuthApi` backed by the housing REST API
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: JsonClient,
}

impl HttpAuthApi {
    pub fn new(base_url: &str, timeout: Duration) -> AuthResult<Self> {
        let client = JsonClient::new(base_url, timeout)?;
        tracing::debug!(base_url = client.base_url(), ?timeout, "Housing API client ready");
        Ok(Self { client })
    }
}

/// Server `message` of a failed response, or `fallback`
fn failure_message(response: &JsonResponse, fallback: &str) -> String {
    response
        .message()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn auth_response(response: JsonResponse) -> AuthResult<AuthResponse> {
    Ok(response.into_json::<AuthResponse>()?)
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> AuthResult<AuthResponse> {
        let response = self.client.post(LOGIN_PATH, None, credentials).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status.as_u16(), "Login rejected");
            return Err(AuthError::Authentication(failure_message(
                &response,
                "Login failed",
            )));
        }
        auth_response(response)
    }

    async fn register(&self, data: &RegistrationData) -> AuthResult<AuthResponse> {
        let response = self.client.post(REGISTER_PATH, None, data).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status.as_u16(), "Registration rejected");
            return Err(AuthError::Registration(failure_message(
                &response,
                "Registration failed",
            )));
        }
        auth_response(response)
    }

    async fn fetch_profile(&self, token: &SessionToken) -> AuthResult<ProfileFetch> {
        let response = self.client.get(PROFILE_PATH, Some(token.as_str())).await?;
        let status = response.status.as_u16();

        Ok(if response.is_success() {
            ProfileFetch::Profile(response.body.unwrap_or(Value::Null))
        } else if status == UNAUTHORIZED {
            ProfileFetch::Unauthorized
        } else {
            ProfileFetch::Failed { status }
        })
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> AuthResult<Map<String, Value>> {
        let response = self
            .client
            .put(PROFILE_PATH, Some(token.as_str()), update)
            .await?;
        if !response.is_success() {
            tracing::debug!(status = response.status.as_u16(), "Profile update rejected");
            return Err(AuthError::ProfileUpdate(failure_message(
                &response,
                "Profile update failed",
            )));
        }

        match response.body {
            Some(Value::Object(fields)) => Ok(fields),
            None => Ok(Map::new()),
            Some(other) => Err(AuthError::InvalidResponse(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }
}
