use crate::setting::SettingKind;
use http::StatusCode;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client construction rejected the supplied configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Value kind does not match the kind declared by the setting. Raised before any request is sent.
    #[error("setting {id} expects a {expected} value, got {actual}")]
    Encoding {
        id: String,
        expected: SettingKind,
        actual: SettingKind,
    },

    /// Request never reached the server or no response came back.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Server answered outside of 2xx. `body` is the raw response text.
    #[error("API responded {status}: {body}")]
    Remote { status: StatusCode, body: String },

    /// 2xx response did not have the expected shape.
    #[error("unexpected API response: {0}")]
    Decoding(#[from] serde_json::Error),
}
