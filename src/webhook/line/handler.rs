//! # LINE Webhook Handler
//!
//! Turns the events of a webhook payload into lookups and sends the replies.

use super::{
    client::ImplLineMessenger,
    schemas::{Event, WebhookPayload},
};
use crate::{api, metric, repo};
use anyhow::Result;

/// Extracts the message events from the webhook payload.
///
/// Follow, unfollow, postback and other non-message events are skipped.
pub fn process_webhook_messages(payload: &WebhookPayload) -> Vec<&Event> {
    payload
        .events
        .iter()
        .filter(|event| event.inbound().is_some())
        .collect::<Vec<_>>()
}

/// Handles a single message event: runs the lookup and replies to the user.
///
/// # Arguments
///
/// * `event` - Message event from LINE
/// * `catalog` - Source of the parking dataset
/// * `client` - LINE API client for sending the reply
pub async fn handle_user_message(
    event: &Event,
    catalog: &repo::ImplCatalogSource,
    client: &ImplLineMessenger,
) -> Result<()> {
    let Some(inbound) = event.inbound() else {
        return Ok(());
    };

    let Some(reply_token) = event.reply_token.as_deref() else {
        logfire::warn!("Message event without reply token, skipping");
        return Ok(());
    };

    let reply = api::parking::dispatch(inbound, catalog).await;
    client.reply_text(reply_token, &reply.text()).await
}

/// Main webhook processor
///
/// Handles every message event of the payload. A failure on one event is
/// logged and does not stop the remaining ones.
pub async fn process_webhook(
    payload: WebhookPayload,
    catalog: &repo::ImplCatalogSource,
    client: &ImplLineMessenger,
) {
    for event in payload.events.iter() {
        metric::incr_webhook_event_statds(&event.event_type);
    }

    let messages = process_webhook_messages(&payload);
    for event in messages {
        if let Err(e) = handle_user_message(event, catalog, client).await {
            logfire::error!("Failed to handle message: {error}", error = e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::facility::FacilityRecord,
        repo::MockCatalogSource,
        webhook::line::client::MockLineMessenger,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn mock_catalog() -> repo::ImplCatalogSource {
        let mut mock_source = MockCatalogSource::new();
        mock_source.expect_load().returning(|| {
            Ok(Arc::new(
                serde_json::from_value::<Vec<FacilityRecord>>(json!([
                    {"停車場名稱": "Lot X", "latitude": 25.03, "longitude": 121.56},
                    {"停車場名稱": "Lot Far", "latitude": 22.6, "longitude": 120.3}
                ]))
                .unwrap(),
            ))
        });
        Box::new(mock_source)
    }

    fn recording_messenger(sent: Arc<Mutex<Vec<(String, String)>>>) -> ImplLineMessenger {
        let mut mock_client = MockLineMessenger::new();
        mock_client.expect_reply_text().returning(move |token, text| {
            sent.lock().unwrap().push((token.to_string(), text.to_string()));
            Ok(())
        });
        Box::new(mock_client)
    }

    fn payload(events: serde_json::Value) -> WebhookPayload {
        serde_json::from_value(json!({"destination": "U0", "events": events})).unwrap()
    }

    #[test]
    fn test_process_webhook_messages() {
        let payload = payload(json!([
            {"type": "follow", "replyToken": "t0", "timestamp": 1},
            {"type": "message", "replyToken": "t1", "timestamp": 2,
             "message": {"id": "1", "type": "sticker"}}
        ]));

        let messages = process_webhook_messages(&payload);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].reply_token.as_deref(), Some("t1"));
    }

    #[ntex::test]
    async fn test_location_message_gets_nearest_lot() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let client = recording_messenger(sent.clone());

        let payload = payload(json!([
            {"type": "message", "replyToken": "t1", "timestamp": 1,
             "message": {"id": "1", "type": "location", "latitude": 25.031, "longitude": 121.561}},
            {"type": "message", "replyToken": "t2", "timestamp": 2,
             "message": {"id": "2", "type": "text", "text": "where can I park?"}}
        ]));

        process_webhook(payload, &mock_catalog(), &client).await;

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "t1");
        assert!(sent[0].1.contains("Name: Lot X"));
        assert!(sent[0].1.ends_with("destination=25.03,121.56"));
        assert_eq!(sent[1], ("t2".to_string(), "請傳送位置訊息".to_string()));
    }

    #[ntex::test]
    async fn test_failed_reply_does_not_stop_other_events() {
        let mut mock_client = MockLineMessenger::new();
        let mut seq = mockall::Sequence::new();
        mock_client
            .expect_reply_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(anyhow::anyhow!("LINE API returned error status 400")));
        mock_client
            .expect_reply_text()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let client: ImplLineMessenger = Box::new(mock_client);

        let payload = payload(json!([
            {"type": "message", "replyToken": "t1", "timestamp": 1,
             "message": {"id": "1", "type": "text", "text": "hi"}},
            {"type": "message", "replyToken": "t2", "timestamp": 2,
             "message": {"id": "2", "type": "text", "text": "hi again"}}
        ]));

        process_webhook(payload, &mock_catalog(), &client).await;
    }

    #[ntex::test]
    async fn test_message_without_reply_token_is_skipped() {
        let mut mock_client = MockLineMessenger::new();
        mock_client.expect_reply_text().never();
        let client: ImplLineMessenger = Box::new(mock_client);

        let payload = payload(json!([
            {"type": "message", "timestamp": 1,
             "message": {"id": "1", "type": "location", "latitude": 25.0, "longitude": 121.0}}
        ]));

        process_webhook(payload, &mock_catalog(), &client).await;
    }
}
