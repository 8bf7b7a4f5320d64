use crate::client::envelope::LoginRequest;
use crate::{ClientError, ClientResult, RegisterRequest, ResponseEnvelope};

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/api/login";
pub const REGISTER_PATH: &str = "/api/register";

const LOGIN_REJECTED: &str = "Invalid login or password";
const REGISTER_REJECTED: &str = "Registration failed";

/// Successful login exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub message: Option<String>,
}

/// HTTP client for the authentication service
#[derive(Debug, Clone)]
pub struct CredentialClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl CredentialClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://192.168.137.1:3000")
    /// * `timeout` - Per-request timeout; `None` waits indefinitely
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Exchange a login and password for a token.
    pub async fn login(&self, login: &str, password: &str) -> ClientResult<LoginGrant> {
        let envelope = self
            .post(LOGIN_PATH, &LoginRequest { login, password })
            .await?;

        match envelope.token() {
            Some(token) if envelope.is_ok() => Ok(LoginGrant {
                token: token.to_string(),
                message: envelope.message.clone(),
            }),
            _ => {
                warn!("Login rejected for {login}");
                Err(ClientError::rejected(
                    envelope.message.unwrap_or_else(|| String::from(LOGIN_REJECTED)),
                ))
            }
        }
    }

    /// Create an account. Returns the server's message, if any.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Option<String>> {
        let envelope = self.post(REGISTER_PATH, request).await?;

        if envelope.is_ok() {
            return Ok(envelope.message);
        }

        warn!("Registration rejected for {}", request.login);
        Err(ClientError::rejected(
            envelope
                .message
                .unwrap_or_else(|| String::from(REGISTER_REJECTED)),
        ))
    }

    /// POST a JSON body and decode the envelope.
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<ResponseEnvelope> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ResponseEnvelope>(&text)
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(ClientError::status(status.as_u16(), message));
        }

        serde_json::from_str(&text).map_err(ClientError::json)
    }
}
