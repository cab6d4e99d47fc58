use raiser_maze::LoadError;

/// A control-panel value that could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Invalid value '{value}' for {control}")]
    InvalidControlInput { control: &'static str, value: String },
}

impl ControlError {
    pub(crate) fn invalid(control: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidControlInput {
            control,
            value: value.into(),
        }
    }
}

/// Errors starting a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to start resource load: {0}")]
    Load(#[from] LoadError),
}
