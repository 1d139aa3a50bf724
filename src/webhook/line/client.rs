//! # LINE API Client
//!
//! Client for replying to webhook events through the LINE Messaging API.

use super::outgoing_schemas::ReplyMessageRequest;
use crate::consts;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Sends replies back to LINE users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineMessenger {
    /// Replies to the event identified by `reply_token` with a text message.
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<()>;
}

pub type ImplLineMessenger = Box<dyn LineMessenger>;

/// LINE API client using the channel access token
#[derive(Clone)]
pub struct LineClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Reply API endpoint
    endpoint: String,
    /// Channel access token
    access_token: String,
}

impl LineClient {
    pub fn new(access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: consts::LINE_REPLY_ENDPOINT.to_string(),
            access_token,
        }
    }
}

#[async_trait]
impl LineMessenger for LineClient {
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<()> {
        let message = ReplyMessageRequest::text(reply_token.to_string(), text.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&message)
            .send()
            .await
            .context("Failed to send request to LINE API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("LINE API returned error status {}: {}", status, body);
        }

        Ok(())
    }
}
