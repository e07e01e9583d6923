/// Error type for controller operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// The content element is not in the tree.
    #[error("content element not found: {id}")]
    TargetNotFound { id: String },

    /// The indicator element is not in the tree.
    #[error("indicator element not found: {id}")]
    IndicatorNotFound { id: String },
}

impl ToggleError {
    /// Id of the element that could not be found.
    pub fn id(&self) -> &str {
        match self {
            Self::TargetNotFound { id } | Self::IndicatorNotFound { id } => id,
        }
    }
}
