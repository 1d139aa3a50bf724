//! Security utilities for LINE webhook verification
//!
//! LINE signs every webhook request body with HMAC-SHA256 using the channel
//! secret and sends the base64-encoded digest in the `X-Line-Signature`
//! header.
//!
//! To verify authenticity:
//! 1. Read the signature from the X-Line-Signature header
//! 2. Compute HMAC-SHA256 of the raw request body using the channel secret
//! 3. Compare the computed digest with the decoded header value
//! 4. Only process the request if they match
//!
//! # Important Notes
//!
//! - The digest MUST be computed on the raw request body bytes, not parsed JSON
//! - The comparison must be constant-time

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verifies the X-Line-Signature header against the request payload
///
/// # Arguments
///
/// * `signature_header` - The value of the X-Line-Signature header (base64)
/// * `payload` - The raw request body bytes
/// * `channel_secret` - The LINE channel secret
///
/// # Returns
///
/// * `true` if the signature is valid
/// * `false` if the signature is invalid or not valid base64
pub fn verify_signature(signature_header: &str, payload: &[u8], channel_secret: &str) -> bool {
    let expected_signature = match STANDARD.decode(signature_header.trim()) {
        Ok(sig) => sig,
        Err(e) => {
            logfire::warn!(
                "Failed to decode signature base64: {error}",
                error = e.to_string()
            );
            return false;
        }
    };

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(e) => {
            logfire::error!(
                "Failed to create HMAC instance: {error}",
                error = e.to_string()
            );
            return false;
        }
    };

    mac.update(payload);
    let computed_signature = mac.finalize().into_bytes();

    // ct_eq on slices of different length is false
    let is_valid: bool = computed_signature.ct_eq(&expected_signature[..]).into();

    if !is_valid {
        logfire::warn!("Webhook signature verification failed: signatures do not match");
    }

    is_valid
}

/// Computes the base64 signature LINE would send for `payload`.
#[cfg(test)]
pub fn sign(payload: &[u8], channel_secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes()).unwrap();
    mac.update(payload);
    STANDARD.encode(mac.finalize().into_bytes())
}
