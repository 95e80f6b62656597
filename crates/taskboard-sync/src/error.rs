/*
[INPUT]:  Local validation outcomes and adapter errors
[OUTPUT]: SyncError taxonomy surfaced to the front-end
[POS]:    Error handling layer - synchronizer failures
[UPDATE]: When adding operations or failure classes
*/

use taskboard_adapter::TaskboardError;
use thiserror::Error;

/// Empty required field, detected before any network call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter a title")]
    EmptyTitle,
    #[error("Please enter a comment")]
    EmptyContent,
}

/// Failure of a synchronizer operation
#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Comment operation against a task missing from the local mirror
    #[error("Task {0} is not loaded")]
    UnknownTask(String),

    /// Edit requested for a comment missing from the local mirror
    #[error("Comment {0} is not loaded")]
    UnknownComment(String),

    #[error("Failed to load {what}")]
    Load {
        what: &'static str,
        #[source]
        source: TaskboardError,
    },

    #[error("Failed to save {what}")]
    Save {
        what: &'static str,
        #[source]
        source: TaskboardError,
    },

    #[error("Failed to delete {what}")]
    Delete {
        what: &'static str,
        #[source]
        source: TaskboardError,
    },
}

impl SyncError {
    /// Network, transport or server failure
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            SyncError::Load { .. } | SyncError::Save { .. } | SyncError::Delete { .. }
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }

    pub(crate) fn load(what: &'static str) -> impl FnOnce(TaskboardError) -> Self {
        move |source| SyncError::Load { what, source }
    }

    pub(crate) fn save(what: &'static str) -> impl FnOnce(TaskboardError) -> Self {
        move |source| SyncError::Save { what, source }
    }

    pub(crate) fn delete(what: &'static str) -> impl FnOnce(TaskboardError) -> Self {
        move |source| SyncError::Delete { what, source }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
