/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Author recorded on comments submitted without a name
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Task as returned by the backend. Unknown fields such as `_id` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Comment attached to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_backend_document() {
        let json = r#"{
            "_id": "665f1c2a9b1e8a0012345678",
            "id": "665f1c2a9b1e8a0012345678",
            "title": "Buy milk",
            "description": "",
            "status": "in-progress",
            "created_at": "2024-06-04T10:00:00.123456+00:00",
            "updated_at": "2024-06-04T11:00:00+00:00"
        }"#;

        let task: Task = serde_json::from_str(json).expect("task");
        assert_eq!(task.id, "665f1c2a9b1e8a0012345678");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn test_task_description_defaults_to_empty() {
        let json = r#"{
            "id": "t1",
            "title": "No details",
            "status": "pending",
            "created_at": "2024-06-04T10:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).expect("task");
        assert_eq!(task.description, "");
        assert_eq!(task.updated_at, None);
    }

    #[test]
    fn test_comment_author_defaults_to_anonymous() {
        let json = r#"{
            "id": "c1",
            "task_id": "t1",
            "content": "urgent",
            "created_at": "2024-06-04T10:00:00Z"
        }"#;

        let comment: Comment = serde_json::from_str(json).expect("comment");
        assert_eq!(comment.author, DEFAULT_AUTHOR);
    }
}
