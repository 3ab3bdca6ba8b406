//! The externally transmitted representation of a port.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PortError;
use crate::ids::PortId;

const LINK_SCHEME: &str = "port://";

/// Typed shape of a port bundle.
///
/// Incoming payloads are untrusted until they have passed through the
/// reader's `validate_bundle` gate; this struct is only constructed there
/// or by a generator exporting one of its own ports. Carries no key
/// material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortBundle {
    pub version: String,
    pub port_id: PortId,
    /// Display-name hint from the creator. The acceptor may rename freely.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_timestamp: Option<DateTime<Utc>>,
}

impl PortBundle {
    /// Encode for QR or paste transport: base64url over compact JSON,
    /// behind a `port://` scheme.
    pub fn to_link(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(format!("{LINK_SCHEME}{}", URL_SAFE_NO_PAD.encode(json)))
    }
}

/// Decode a transported link back into an untrusted JSON payload.
///
/// The result still has to pass the reader's `validate_bundle` gate; this
/// only peels the transport encoding.
pub fn decode_bundle_link(link: &str) -> Result<serde_json::Value, PortError> {
    let encoded = link.strip_prefix(LINK_SCHEME).unwrap_or(link).trim();
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| PortError::InvalidBundle(format!("link is not valid base64: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| PortError::InvalidBundle(format!("link payload is not valid JSON: {e}")))
}
