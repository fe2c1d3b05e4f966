//! Jupyter wire messages
//!
//! On the wire a message is a list of frames:
//!
//! ```text
//! [topic, "<IDS|MSG>", signature, header, parent_header, metadata, content]
//! ```
//!
//! The signature is the hex HMAC-SHA256 of the four JSON frames that follow
//! it, keyed with the connection key. An empty key yields an empty signature.

use bytes::Bytes;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sha2::Sha256;
use uuid::Uuid;

use ggspec::Options;

use crate::error::{KernelError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Delimiter between routing identities and the message body
pub const DELIMITER: &[u8] = b"<IDS|MSG>";

/// Messaging protocol version
pub const PROTOCOL_VERSION: &str = "5.3";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub msg_id: String,
    pub session: String,
    pub username: String,
    pub date: String,
    pub msg_type: String,
    pub version: String,
}

impl Header {
    pub fn new(session: &str, msg_type: &str) -> Self {
        Self {
            msg_id: Uuid::new_v4().to_string(),
            session: session.to_string(),
            username: "ggspec".to_string(),
            date: chrono::Utc::now().to_rfc3339(),
            msg_type: msg_type.to_string(),
            version: PROTOCOL_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JupyterMessage {
    pub header: Header,
    /// Header of the request this message answers, `{}` when unsolicited
    pub parent_header: Value,
    pub metadata: Value,
    pub content: Value,
}

impl JupyterMessage {
    /// `display_data` carrying a MIME bundle
    pub fn display_data(session: &str, parent_header: Value, bundle: Options) -> Self {
        Self {
            header: Header::new(session, "display_data"),
            parent_header,
            metadata: json!({}),
            content: json!({
                "data": bundle,
                "metadata": {},
                "transient": {}
            }),
        }
    }

    pub fn msg_type(&self) -> &str {
        &self.header.msg_type
    }

    /// Serialize into signed wire frames, starting with the topic
    pub fn to_frames(&self, signer: &Signer) -> Result<Vec<Bytes>> {
        let header = serde_json::to_vec(&self.header)?;
        let parent_header = serde_json::to_vec(&self.parent_header)?;
        let metadata = serde_json::to_vec(&self.metadata)?;
        let content = serde_json::to_vec(&self.content)?;
        let signature = signer.sign(&[
            header.as_slice(),
            parent_header.as_slice(),
            metadata.as_slice(),
            content.as_slice(),
        ])?;

        Ok(vec![
            Bytes::from(self.header.msg_type.clone()),
            Bytes::from_static(DELIMITER),
            Bytes::from(signature),
            Bytes::from(header),
            Bytes::from(parent_header),
            Bytes::from(metadata),
            Bytes::from(content),
        ])
    }
}

/// HMAC-SHA256 message signer
#[derive(Debug, Clone)]
pub struct Signer {
    key: Vec<u8>,
}

impl Signer {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Hex signature over the given parts in order
    pub fn sign(&self, parts: &[&[u8]]) -> Result<String> {
        if self.key.is_empty() {
            return Ok(String::new());
        }
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| KernelError::SigningKey(e.to_string()))?;
        for part in parts {
            mac.update(part);
        }
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hmac_vector() {
        let signer = Signer::new("key");
        let parts: [&[u8]; 2] = [b"The quick brown fox ", b"jumps over the lazy dog"];
        let signature = signer.sign(&parts).unwrap();
        assert_eq!(
            signature,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_empty_key_disables_signing() {
        let parts: [&[u8]; 1] = [b"anything"];
        assert_eq!(Signer::new("").sign(&parts).unwrap(), "");
    }

    #[test]
    fn test_frames_layout() {
        let bundle = Options::new().with("text/html", "<div></div>");
        let message = JupyterMessage::display_data("session-1", json!({}), bundle);
        let signer = Signer::new("secret");
        let frames = message.to_frames(&signer).unwrap();

        assert_eq!(frames.len(), 7);
        assert_eq!(&frames[0][..], b"display_data");
        assert_eq!(&frames[1][..], DELIMITER);

        let expected = signer
            .sign(&[&frames[3][..], &frames[4][..], &frames[5][..], &frames[6][..]])
            .unwrap();
        assert_eq!(&frames[2][..], expected.as_bytes());

        let content: Value = serde_json::from_slice(&frames[6]).unwrap();
        assert_eq!(content["data"]["text/html"], json!("<div></div>"));
    }

    #[test]
    fn test_header_fields() {
        let header = Header::new("s", "display_data");
        assert_eq!(header.version, "5.3");
        assert!(chrono::DateTime::parse_from_rfc3339(&header.date).is_ok());
        assert!(Uuid::parse_str(&header.msg_id).is_ok());
    }
}
