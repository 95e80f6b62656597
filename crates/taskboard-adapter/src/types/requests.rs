/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Body of `POST /api/comments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCommentRequest {
    pub task_id: String,
    pub content: String,
    pub author: String,
}

/// Body of `PUT /api/comments/{id}`. The author cannot be changed after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_input_body_shape() {
        let input = TaskInput::new("Buy milk")
            .with_description("2 liters")
            .with_status(TaskStatus::InProgress);

        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Buy milk",
                "description": "2 liters",
                "status": "in-progress"
            })
        );
    }

    #[test]
    fn test_update_comment_body_has_no_author() {
        let body = serde_json::to_value(UpdateCommentRequest {
            content: "edited".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "content": "edited" }));
    }
}
