/// Errors raised while adapting wire data into the domain model.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid count for tag {tag:?}: {value:?} is not a non-negative integer")]
    InvalidCount { tag: String, value: String },

    #[error("Invalid duration {0:?}: expected a number with an optional ms, s or m suffix")]
    InvalidDuration(String),
}
