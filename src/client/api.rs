/**
 * Auth API Client
 *
 * HTTP calls to the auth endpoints. `AuthApi` is the seam the session
 * context talks to; `HttpAuthApi` implements it with `reqwest`.
 *
 * # Error Handling
 *
 * Non-2xx responses become `ClientError::Api` carrying the status and the
 * server's `error` message when the body has one.
 */

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::client::config::ClientConfig;
use crate::shared::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

/// Client-side failure
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Message the server sent with a rejected request, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

/// Auth endpoints as seen by the client
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;

    /// Profile of the token's subject
    async fn me(&self, token: &str) -> Result<UserResponse, ClientError>;
}

#[async_trait]
impl<T: AuthApi + ?Sized> AuthApi for Arc<T> {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        (**self).register(request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        (**self).login(request).await
    }

    async fn me(&self, token: &str) -> Result<UserResponse, ClientError> {
        (**self).me(token).await
    }
}

/// `AuthApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    config: ClientConfig,
}

impl HttpAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(self.config.api_url("/api/auth/register"))
            .json(request)
            .send()
            .await?;

        parse_response(response).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response = self
            .client
            .post(self.config.api_url("/api/auth/login"))
            .json(request)
            .send()
            .await?;

        parse_response(response).await
    }

    async fn me(&self, token: &str) -> Result<UserResponse, ClientError> {
        let response = self
            .client
            .get(self.config.api_url("/api/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("error")?.as_str().map(str::to_owned))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        tracing::debug!("API error {}: {}", status, message);

        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let error = ClientError::Api {
            status: 400,
            message: "email already in use".to_string(),
        };
        assert_eq!(error.server_message(), Some("email already in use"));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        let error = ClientError::Api {
            status: 401,
            message: "invalid token".to_string(),
        };
        assert!(error.is_unauthorized());
    }
}
