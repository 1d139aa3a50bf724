use derive_more::{Display, Error};
use ntex::{http, web};

/// Errors answered to the caller of the webhook endpoint.
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    #[display("Bad Request: No signature")]
    MissingSignature,
    #[display("Bad Request: Invalid signature")]
    InvalidSignature,
    #[display("Internal Server Error")]
    MalformedPayload(#[error(not(source))] String),
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        if let WebhookError::MalformedPayload(msg) = self {
            tracing::error!("Failed to parse webhook payload: {msg}");
        }

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body(self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::MissingSignature | WebhookError::InvalidSignature => {
                http::StatusCode::BAD_REQUEST
            }
            WebhookError::MalformedPayload(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
