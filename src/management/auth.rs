use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{error::CredentialError, types::Credential, utils};

/// Strategy for obtaining a fresh credential.
///
/// The production source performs the client-credentials grant against the
/// accounts service; tests plug in their own.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch(&self) -> Result<Credential, CredentialError>;
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        utils::with_jitter(utils::backoff_delay(
            attempt,
            self.base_delay,
            self.max_delay,
        ))
    }
}

/// Holds the process-wide app credential and keeps it valid.
///
/// Shared behind an `Arc` by everything that talks to the catalog. Reads are
/// concurrent; a refresh takes the write lock, so callers arriving during a
/// refresh wait for the new token instead of using a stale one.
pub struct TokenManager {
    source: Arc<dyn TokenSource>,
    policy: RetryPolicy,
    token: RwLock<Option<Credential>>,
}

impl TokenManager {
    pub fn new(source: Arc<dyn TokenSource>, policy: RetryPolicy) -> Self {
        TokenManager {
            source,
            policy,
            token: RwLock::new(None),
        }
    }

    /// Fetches a credential, retrying transient failures, and stores it.
    pub async fn acquire(&self) -> Result<Credential, CredentialError> {
        let mut lock = self.token.write().await;
        let credential = self.fetch_with_retry().await?;
        *lock = Some(credential.clone());
        Ok(credential)
    }

    /// Returns the current access token, refreshing it first when missing or
    /// expired.
    pub async fn get_valid_token(&self) -> Result<String, CredentialError> {
        {
            let lock = self.token.read().await;
            if let Some(token) = lock.as_ref().filter(|t| !t.is_expired()) {
                return Ok(token.access_token.clone());
            }
        }

        let mut lock = self.token.write().await;
        // another caller may have refreshed while we waited for the lock
        if let Some(token) = lock.as_ref().filter(|t| !t.is_expired()) {
            return Ok(token.access_token.clone());
        }

        tracing::info!("access token missing or expired, refreshing");
        let credential = self.fetch_with_retry().await?;
        let access_token = credential.access_token.clone();
        *lock = Some(credential);
        Ok(access_token)
    }

    pub async fn current_token(&self) -> Option<Credential> {
        self.token.read().await.clone()
    }

    async fn fetch_with_retry(&self) -> Result<Credential, CredentialError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            match self.source.fetch().await {
                Ok(credential) => {
                    tracing::debug!(attempt, expires_in = credential.expires_in, "access token obtained");
                    return Ok(credential);
                }
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) => {
                    attempt += 1;
                    if attempt >= attempts {
                        return Err(CredentialError::Exhausted {
                            attempts,
                            last: Box::new(e),
                        });
                    }

                    let delay = self.policy.delay_for(attempt - 1);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "access token request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
