use ntex::web;

/// Configures the webhook route receiving LINE events.
///
/// This is a public endpoint; authenticity is checked through the request
/// signature instead of a session.
///
/// # Routes
/// - `POST /webhook` - LINE webhook receiver
pub fn line(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/webhook").service(super::line::receive));
}
