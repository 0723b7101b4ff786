use thiserror::Error;

/// Errors raised by the completion state machine.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A one-time goal already has a completion event for this user.
    #[error("Goal '{0}' is already completed")]
    AlreadyCompleted(String),

    /// Undo was requested but no completion event exists.
    #[error("Goal '{0}' has no completion to undo")]
    NothingToUndo(String),

    /// The goal exists but is not active.
    #[error("Goal '{0}' is not active")]
    GoalInactive(String),
}
