//! # LINE Webhook Schemas
//!
//! Data structures for the JSON payload the LINE Messaging API posts to the
//! webhook when events occur (messages, follows, postbacks, ...).

use crate::models::event::InboundEvent;
use serde::{Deserialize, Serialize};

/// Root webhook payload from LINE
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// User ID of the bot that should receive the events
    #[serde(default)]
    pub destination: String,
    /// Events delivered in this request, possibly empty
    pub events: Vec<Event>,
}

/// A single webhook event
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event type (message, follow, unfollow, postback, ...)
    #[serde(rename = "type")]
    pub event_type: String,
    /// Token to reply to this event, absent for events that can't be replied to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    /// Time of the event in milliseconds since epoch
    #[serde(default)]
    pub timestamp: i64,
    /// Where the event came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Message content (if type is "message")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

impl Event {
    /// Converts a message event into the event handed to the lookup.
    /// Returns `None` for events that are not messages.
    pub fn inbound(&self) -> Option<InboundEvent> {
        if self.event_type != "message" {
            return None;
        }

        let message = self.message.as_ref()?;
        match (message.msg_type.as_str(), message.latitude, message.longitude) {
            ("location", Some(latitude), Some(longitude)) => Some(InboundEvent::Location {
                latitude,
                longitude,
            }),
            _ => Some(InboundEvent::NonLocation),
        }
    }
}

/// Event source (user, group chat or multi-person room)
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

/// Message object
#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    /// Message ID
    pub id: String,
    /// Message type (text, image, sticker, location, ...)
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Text body (if type is "text")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Location title (if type is "location")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Location address (if type is "location")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Latitude (if type is "location")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude (if type is "location")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
