/*
[INPUT]:  Start/cancel/submit/delete actions from the front-end
[OUTPUT]: Single-selection edit state with a draft buffer
[POS]:    Editing state machine - one instance for tasks, one for comments
[UPDATE]: When draft fields or transitions change
*/

use taskboard_adapter::{Comment, Task, TaskInput, TaskStatus};

/// Form buffer for the task form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
        }
    }

    pub fn to_input(&self) -> TaskInput {
        TaskInput {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

/// Form buffer for the comment form. An empty author means "Anonymous".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentDraft {
    pub content: String,
    pub author: String,
}

impl CommentDraft {
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            content: comment.content.clone(),
            author: comment.author.clone(),
        }
    }
}

/// Edit state: nothing selected, or exactly one entity with its draft
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSelection<D> {
    #[default]
    Idle,
    Editing { id: String, draft: D },
}

impl<D: Default> EditSelection<D> {
    /// Select `id` for editing. An active selection is overwritten without
    /// confirmation and its draft is lost.
    pub fn start(&mut self, id: impl Into<String>, draft: D) {
        *self = EditSelection::Editing {
            id: id.into(),
            draft,
        };
    }

    /// Return to `Idle`, discarding the draft
    pub fn cancel(&mut self) {
        *self = EditSelection::Idle;
    }

    /// Return to `Idle` if `id` is the entity being edited
    pub fn clear_if_editing(&mut self, id: &str) {
        if self.editing_id() == Some(id) {
            self.cancel();
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSelection::Idle)
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditSelection::Idle => None,
            EditSelection::Editing { id, .. } => Some(id),
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            EditSelection::Idle => None,
            EditSelection::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            EditSelection::Idle => None,
            EditSelection::Editing { draft, .. } => Some(draft),
        }
    }
}
