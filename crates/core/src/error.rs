/// Domain errors raised by parking lot logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input outside the accepted values (terminal, type, side, status, counts).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write collided with a row for the same lot written concurrently.
    #[error("Conflict: {0}")]
    Conflict(String),
}
