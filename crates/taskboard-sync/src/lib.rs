/*
[INPUT]:  Public API exports for taskboard-sync crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod confirm;
pub mod error;
pub mod notice;
pub mod selection;
pub mod store;
pub mod views;

// Re-export main types for convenience
pub use config::AppConfig;
pub use confirm::ConfirmGate;
pub use error::{SyncError, ValidationFailure};
pub use notice::{Notice, NoticeLevel};
pub use selection::{CommentDraft, EditSelection, TaskDraft};
pub use store::{Deletion, TaskStore, resolve_author};
pub use views::{StatusCounts, StatusFilter, count_by_status, filter_by_status};
