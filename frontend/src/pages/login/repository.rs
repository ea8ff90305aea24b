use crate::api::{ApiClient, ApiError, LoginRequest, UserProfile};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Returns the bearer token issued for the credentials.
    pub async fn login(&self, request: LoginRequest) -> Result<String, ApiError> {
        self.client.login(&request).await.map(|response| response.token)
    }

    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.client.get_profile_with_token(token).await
    }
}
