use reqwest::Method;

use super::client::{decode, to_body, Auth};
use super::{ApiClient, ApiError, Envelope, ErrorKind, LoginRequest, LoginResponse, UserProfile};

impl ApiClient {
    /// Exchanges credentials for a bearer token. Rejections surface as credential errors.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(
                Method::POST,
                "/employees/login",
                Auth::None,
                Some(to_body(request)?),
            )
            .await
            .map_err(|err| {
                if err.kind() == ErrorKind::Request && err.code.starts_with("HTTP_4") {
                    ApiError::invalid_credentials(err.error)
                } else {
                    err
                }
            })?;
        decode(response).await
    }

    /// Profile for a token that has not been persisted yet.
    pub async fn get_profile_with_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .send(
                Method::GET,
                "/employees/me",
                Auth::Token(token.to_string()),
                None,
            )
            .await?;
        decode::<Envelope<UserProfile>>(response)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.get_data("/employees/me").await
    }
}
