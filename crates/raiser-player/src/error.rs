/// Errors from reading the player model description.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Failed to parse player model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid player model: {0}")]
    InvalidModel(String),
}
