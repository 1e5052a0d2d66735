use thiserror::Error;

/// Error type for store-layer consumers.
///
/// Thunks surface every API failure here after recording it in the
/// store; callers decide whether to render it inline (the global alert
/// has already been raised unless the thunk opted out).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] sitedeck_api::Error),
}

impl CoreError {
    /// The short, user-facing message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
        }
    }
}
