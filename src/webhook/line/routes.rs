//! LINE webhook endpoint handler
//!
//! # Security
//!
//! Every request must carry a valid `X-Line-Signature`; see [`super::security`].
//! Requests without it are rejected before the body is parsed.

use super::{handler, schemas, security};
use crate::{
    consts,
    webhook::{AppState, errors::WebhookError},
};
use ntex::{util::Bytes, web};

/// Webhook receiver endpoint (POST)
///
/// Receives webhook events from the LINE Messaging API, answers every message
/// event through the reply API and acknowledges with `200 OK`.
///
/// # Returns
/// - 200 `OK` once the events have been handled
/// - 400 if the signature header is missing or invalid
/// - 500 if the body is not a webhook payload
#[web::post("")]
pub async fn receive(
    req: web::HttpRequest,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let _span = logfire::span!("line_webhook").entered();

    let signature = req
        .headers()
        .get(consts::LINE_SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or(WebhookError::MissingSignature)?;

    if !security::verify_signature(signature, &body, &app_state.channel_secret) {
        return Err(WebhookError::InvalidSignature.into());
    }

    let payload: schemas::WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;

    tracing::info!(
        "Received webhook: destination={}, events={}",
        payload.destination,
        payload.events.len()
    );

    // LINE allows a few seconds to answer; the lookup is well within that
    handler::process_webhook(payload, &app_state.catalog, &app_state.line_client).await;

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body("OK"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::facility::FacilityRecord,
        repo::MockCatalogSource,
        webhook::{self, line::client::MockLineMessenger},
    };
    use ntex::{http, web::test};
    use std::sync::Arc;

    const SECRET: &str = "channel_secret";

    fn app_state(expected_replies: usize) -> AppState {
        let mut mock_source = MockCatalogSource::new();
        mock_source.expect_load().returning(|| {
            Ok(Arc::new(vec![
                serde_json::from_str::<FacilityRecord>(
                    r#"{"停車場名稱": "Lot X", "latitude": 25.03, "longitude": 121.56}"#,
                )
                .unwrap(),
            ]))
        });

        let mut mock_client = MockLineMessenger::new();
        mock_client
            .expect_reply_text()
            .times(expected_replies)
            .returning(|_, _| Ok(()));

        AppState {
            catalog: Box::new(mock_source),
            line_client: Box::new(mock_client),
            channel_secret: SECRET.to_string(),
        }
    }

    fn webhook_request(body: &'static str, signature: Option<String>) -> test::TestRequest {
        let mut req = test::TestRequest::with_uri("/webhook")
            .method(http::Method::POST)
            .set_payload(body);
        if let Some(signature) = signature {
            req = req.header(consts::LINE_SIGNATURE_HEADER, signature);
        }
        req
    }

    const LOCATION_BODY: &str = r#"{"destination":"U0","events":[{"type":"message","replyToken":"t1","timestamp":1,"message":{"id":"1","type":"location","latitude":25.031,"longitude":121.561}}]}"#;

    #[ntex::test]
    async fn test_signed_request_is_processed() {
        let app = test::init_service(
            web::App::new()
                .state(app_state(1))
                .configure(webhook::routes::line),
        )
        .await;

        let signature = security::sign(LOCATION_BODY.as_bytes(), SECRET);
        let resp =
            test::call_service(&app, webhook_request(LOCATION_BODY, Some(signature)).to_request())
                .await;

        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(test::read_body(resp).await, Bytes::from_static(b"OK"));
    }

    #[ntex::test]
    async fn test_missing_signature_is_bad_request() {
        let app = test::init_service(
            web::App::new()
                .state(app_state(0))
                .configure(webhook::routes::line),
        )
        .await;

        let resp =
            test::call_service(&app, webhook_request(LOCATION_BODY, None).to_request()).await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(
            test::read_body(resp).await,
            Bytes::from_static(b"Bad Request: No signature")
        );
    }

    #[ntex::test]
    async fn test_invalid_signature_is_bad_request() {
        let app = test::init_service(
            web::App::new()
                .state(app_state(0))
                .configure(webhook::routes::line),
        )
        .await;

        let signature = security::sign(LOCATION_BODY.as_bytes(), "another_secret");
        let resp =
            test::call_service(&app, webhook_request(LOCATION_BODY, Some(signature)).to_request())
                .await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
    }

    #[ntex::test]
    async fn test_signed_garbage_is_server_error() {
        let app = test::init_service(
            web::App::new()
                .state(app_state(0))
                .configure(webhook::routes::line),
        )
        .await;

        let body = "not json";
        let signature = security::sign(body.as_bytes(), SECRET);
        let resp =
            test::call_service(&app, webhook_request(body, Some(signature)).to_request()).await;

        assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
