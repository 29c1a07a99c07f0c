use serde::Deserialize;

/// Acknowledgment body returned by every POST endpoint.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}
