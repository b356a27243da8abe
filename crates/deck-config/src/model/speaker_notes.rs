//! Speaker notes publishing

use std::net::{AddrParseError, SocketAddr};

use deck_schema::{FieldSpec, Fields, Finding, ObjectSchema, Resolved, Schema};
use serde::{Deserialize, Serialize};

/// Broadcast address on the loopback network.
pub const DEFAULT_SPEAKER_NOTES_ADDRESS: &str = "127.255.255.255:59418";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeakerNotesConfig {
    pub listen_address: String,
    pub publish_address: String,
    /// Publish notes even when not started in publishing mode.
    pub always_publish: bool,
}

impl Default for SpeakerNotesConfig {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_SPEAKER_NOTES_ADDRESS.to_string(),
            publish_address: DEFAULT_SPEAKER_NOTES_ADDRESS.to_string(),
            always_publish: false,
        }
    }
}

impl SpeakerNotesConfig {
    pub fn listen_socket(&self) -> Result<SocketAddr, AddrParseError> {
        self.listen_address.parse()
    }

    pub fn publish_socket(&self) -> Result<SocketAddr, AddrParseError> {
        self.publish_address.parse()
    }
}

fn socket_addresses(fields: &Fields) -> Vec<Finding> {
    ["listen_address", "publish_address"]
        .into_iter()
        .filter_map(|field| {
            let address = fields.get(field).and_then(Resolved::as_str)?;
            let error = address.parse::<SocketAddr>().err()?;
            Some(Finding::new(
                field,
                format!("invalid socket address '{address}': {error}"),
            ))
        })
        .collect()
}

pub(crate) fn schema() -> Schema {
    Schema::Object(
        ObjectSchema::new("SpeakerNotesConfig")
            .field(
                "listen_address",
                FieldSpec::optional(Schema::string())
                    .with_default(DEFAULT_SPEAKER_NOTES_ADDRESS)
                    .describe("The address in which to listen for speaker note events."),
            )
            .field(
                "publish_address",
                FieldSpec::optional(Schema::string())
                    .with_default(DEFAULT_SPEAKER_NOTES_ADDRESS)
                    .describe("The address in which to publish speaker notes events."),
            )
            .field(
                "always_publish",
                FieldSpec::optional(Schema::boolean())
                    .with_default(false)
                    .describe("Whether to always publish speaker notes."),
            )
            .check(socket_addresses),
    )
}
