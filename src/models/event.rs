/// Platform-independent event handed to the lookup by the webhook gateway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InboundEvent {
    /// The user shared a location. Values are not range checked yet.
    Location { latitude: f64, longitude: f64 },
    /// Any other kind of message.
    NonLocation,
}
