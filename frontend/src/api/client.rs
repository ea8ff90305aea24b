use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::*, config, router::paths, state::session::SessionStore, utils::navigation,
};

/// Which bearer token, if any, a request carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Auth {
    /// The persisted session token. A 401 here forces a logout.
    Session,
    /// An explicit token, used while a login is still in flight.
    Token(String),
    None,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
            on_unauthorized: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
            on_unauthorized: None,
        }
    }

    /// Registers a callback run after a 401 has cleared the stored session.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn handle_unauthorized(&self) {
        log::warn!("Backend rejected the session token; signing out");
        if let Err(err) = self.session.clear() {
            log::error!("Failed to clear the stored session: {}", err);
        }
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
        navigation::redirect_to(paths::LOGIN);
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        let mut request = self.client.request(method.clone(), &url);

        match &auth {
            Auth::Session => {
                let Some(token) = self.session.token() else {
                    self.handle_unauthorized();
                    return Err(ApiError::unauthorized());
                };
                request = request.bearer_auth(token);
            }
            Auth::Token(token) => request = request.bearer_auth(token),
            Auth::None => {}
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|err| {
            log::error!("{} {} failed: {}", method, path, err);
            ApiError::request_failed(format!("Request failed: {}", err))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED && auth == Auth::Session {
            self.handle_unauthorized();
            return Err(ApiError::unauthorized());
        }
        let error = error_from_response(status, response).await;
        log::warn!("{} {} returned {}: {}", method, path, status, error);
        Err(error)
    }

    /// Authenticated request decoded straight into `E`.
    pub(crate) async fn request_json<E: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<E, ApiError> {
        let response = self.send(method, path, Auth::Session, body).await?;
        decode(response).await
    }

    /// Authenticated GET returning the `data` of the standard envelope.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json::<Envelope<T>>(Method::GET, path, None)
            .await
            .map(|envelope| envelope.data)
    }

    /// Authenticated mutation; returns the server's `message`, if it sent one.
    pub(crate) async fn mutate(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<String>, ApiError> {
        let response = self.send(method, path, Auth::Session, body).await?;
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::unknown(format!("Failed to read response: {}", err)))?;
        Ok(message_from_body(&text))
    }
}

pub(crate) fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|err| ApiError::unknown(format!("Failed to encode request: {}", err)))
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
}

fn message_from_body(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
}

async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
    let body: ErrorBody = response.json().await.unwrap_or_default();
    ApiError {
        error: body
            .error
            .or(body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        code: body
            .code
            .unwrap_or_else(|| format!("HTTP_{}", status.as_u16())),
        details: body.details,
    }
}

#[cfg(test)]
mod tests {
    use super::message_from_body;

    #[test]
    fn message_is_read_from_json_bodies_only() {
        assert_eq!(
            message_from_body(r#"{"message":"Saved","data":{}}"#).as_deref(),
            Some("Saved")
        );
        assert_eq!(message_from_body(r#"{"data":{}}"#), None);
        assert_eq!(message_from_body(""), None);
        assert_eq!(message_from_body("OK"), None);
    }
}
