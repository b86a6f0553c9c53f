use serde::{Deserialize, Serialize};

/// Messages posted by the identity-provider bridge running in the page.
///
/// The bridge script emits these as JSON objects tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderEvent {
    /// The provider script loaded and `accounts.id.initialize` ran.
    Ready,
    /// The provider invoked the credential callback.
    Credential { credential: String },
    /// The provider script could not be loaded or initialized.
    Unavailable { message: String },
}

impl ProviderEvent {
    /// Parse a bridge message, treating anything unrecognized as `None`.
    pub fn parse(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }
}
