use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Settings,
    error::CredentialError,
    management::TokenSource,
    types::{Credential, TokenErrorResponse, TokenResponse},
};

/// Obtains app-level access tokens with the OAuth 2.0 client-credentials
/// grant.
///
/// The grant needs no user interaction: the client id and secret are sent
/// as HTTP Basic credentials and the accounts service answers with a bearer
/// token valid for about an hour. Such tokens give access to the public
/// catalog only (search, artists, albums, tracks).
///
/// # Example
///
/// ```
/// let grant = ClientCredentialsGrant::from_settings(&settings);
/// let credential = grant.fetch().await?;
/// println!("token expires in {} seconds", credential.expires_in);
/// ```
pub struct ClientCredentialsGrant {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    timeout: Duration,
}

impl ClientCredentialsGrant {
    pub fn new(
        client: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout,
        }
    }

    pub fn from_settings(client: Client, settings: &Settings) -> Self {
        Self::new(
            client,
            &settings.token_url,
            &settings.client_id,
            &settings.client_secret,
            settings.request_timeout,
        )
    }

    fn basic_auth_header(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
        )
    }

    async fn request_token(&self) -> Result<Credential, CredentialError> {
        let res = self
            .client
            .post(&self.token_url)
            .header(reqwest::header::AUTHORIZATION, self.basic_auth_header())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(desc) => format!("{}: {}", err.error, desc),
                    None => err.error,
                },
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(CredentialError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let json = res.json::<TokenResponse>().await?;

        Ok(Credential {
            access_token: json.access_token,
            token_type: json.token_type,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}

#[async_trait]
impl TokenSource for ClientCredentialsGrant {
    async fn fetch(&self) -> Result<Credential, CredentialError> {
        match tokio::time::timeout(self.timeout, self.request_token()).await {
            Ok(result) => result,
            Err(_) => Err(CredentialError::Timeout),
        }
    }
}
