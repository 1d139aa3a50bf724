//! # LINE Outgoing Message Schemas
//!
//! Request bodies for the LINE Messaging API reply endpoint.

use serde::{Deserialize, Serialize};

/// Reply request answering a single webhook event
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest {
    /// Reply token received with the event
    pub reply_token: String,
    /// Up to five messages to send
    pub messages: Vec<OutgoingTextMessage>,
}

impl ReplyMessageRequest {
    /// Creates a reply with a single text message
    pub fn text(reply_token: String, text: String) -> Self {
        Self {
            reply_token,
            messages: vec![OutgoingTextMessage::new(text)],
        }
    }
}

/// Text message to send to LINE
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Message type, always "text"
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Message body text
    pub text: String,
}

impl OutgoingTextMessage {
    pub fn new(text: String) -> Self {
        Self {
            msg_type: "text".to_string(),
            text,
        }
    }
}
