/*
[INPUT]:  User actions (load/create/update/delete) and TaskApi responses
[OUTPUT]: Local mirror of tasks and per-task comment buckets, notices
[POS]:    Client state synchronizer - sole owner of local task/comment state
[UPDATE]: When adding operations or changing reconciliation rules
*/

use futures_util::future::join_all;
use std::collections::{HashMap, HashSet};
use taskboard_adapter::{
    Comment, DEFAULT_AUTHOR, NewCommentRequest, Task, TaskApi, TaskInput, UpdateCommentRequest,
};
use tracing::{error, info, warn};

use crate::confirm::{ConfirmGate, DELETE_COMMENT_PROMPT, DELETE_TASK_PROMPT};
use crate::error::{Result, SyncError, ValidationFailure};
use crate::notice::Notice;
use crate::selection::{CommentDraft, EditSelection, TaskDraft};
use crate::views::{StatusCounts, StatusFilter, count_by_status, filter_by_status};

/// Outcome of a confirmation-gated delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The user declined; nothing was sent
    Cancelled,
    Deleted,
}

/// Author stored for a new comment: the name as typed, or "Anonymous" when
/// none was given or it is blank
pub fn resolve_author(author: Option<&str>) -> String {
    match author {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}

fn require_title(input: &TaskInput) -> std::result::Result<(), ValidationFailure> {
    if input.title.trim().is_empty() {
        return Err(ValidationFailure::EmptyTitle);
    }
    Ok(())
}

fn require_content(content: &str) -> std::result::Result<(), ValidationFailure> {
    if content.trim().is_empty() {
        return Err(ValidationFailure::EmptyContent);
    }
    Ok(())
}

/// Local mirror of the remote task and comment collections
///
/// Every mutation goes to the server first; only a successful response is
/// applied locally, and it replaces the local record wholesale. A failed call
/// leaves state exactly as it was.
///
/// Comments are loaded eagerly: [`TaskStore::load_tasks`] fetches every
/// task's bucket, and the front-end shows them inline. Only the comment form
/// is toggled per task.
pub struct TaskStore<A> {
    api: A,
    tasks: Vec<Task>,
    comments: HashMap<String, Vec<Comment>>,
    filter: StatusFilter,
    loading: bool,
    task_edit: EditSelection<TaskDraft>,
    comment_edit: EditSelection<CommentDraft>,
    open_comment_forms: HashSet<String>,
    notices: Vec<Notice>,
}

impl<A: TaskApi> TaskStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            comments: HashMap::new(),
            filter: StatusFilter::All,
            loading: true,
            task_edit: EditSelection::Idle,
            comment_edit: EditSelection::Idle,
            open_comment_forms: HashSet::new(),
            notices: Vec::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ---- read access -------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Comments of one task; `None` when no bucket has been loaded for it
    pub fn comments_for(&self, task_id: &str) -> Option<&[Comment]> {
        self.comments.get(task_id).map(Vec::as_slice)
    }

    /// True until the first `load_tasks` finishes, successfully or not
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Tasks passing the active filter, in mirror order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_by_status(&self.tasks, self.filter)
    }

    pub fn counts(&self) -> StatusCounts {
        count_by_status(&self.tasks)
    }

    pub fn task_edit(&self) -> &EditSelection<TaskDraft> {
        &self.task_edit
    }

    pub fn comment_edit(&self) -> &EditSelection<CommentDraft> {
        &self.comment_edit
    }

    /// Drain pending notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ---- loading -----------------------------------------------------

    /// Replace the task mirror with the server's list, then fetch every
    /// task's comments. A failed comment fetch is logged and leaves that
    /// task's previous bucket in place; it never fails the whole load.
    pub async fn load_tasks(&mut self) -> Result<()> {
        let result = self.api.list_tasks().await;
        self.loading = false;

        let tasks = match result {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(status = ?err.status(), error = %err, "failed to fetch tasks");
                self.notices.push(Notice::error("Failed to connect to server"));
                return Err(SyncError::load("tasks")(err));
            }
        };
        info!(count = tasks.len(), "fetched tasks");

        let ids: Vec<String> = tasks.iter().map(|task| task.id.clone()).collect();
        self.tasks = tasks;
        self.comments.retain(|task_id, _| ids.contains(task_id));
        self.open_comment_forms.retain(|task_id| ids.contains(task_id));
        let editing_gone = self
            .task_edit
            .editing_id()
            .is_some_and(|id| !ids.iter().any(|task_id| task_id == id));
        if editing_gone {
            self.task_edit.cancel();
        }

        let api = &self.api;
        let fetches = ids.iter().map(|id| async move { (id, api.list_comments(id).await) });
        for (task_id, result) in join_all(fetches).await {
            match result {
                Ok(comments) => {
                    self.comments.insert(task_id.clone(), comments);
                }
                Err(err) => {
                    warn!(task_id = %task_id, error = %err, "failed to fetch comments");
                }
            }
        }

        let comment_gone = self
            .comment_edit
            .editing_id()
            .is_some_and(|id| self.comment_owner(id).is_none());
        if comment_gone {
            self.comment_edit.cancel();
        }
        Ok(())
    }

    /// Replace one task's comment bucket with the server's list
    pub async fn load_comments_for(&mut self, task_id: &str) -> Result<()> {
        self.ensure_task(task_id)?;
        match self.api.list_comments(task_id).await {
            Ok(comments) => {
                info!(task_id, count = comments.len(), "fetched comments");
                self.comments.insert(task_id.to_string(), comments);
                Ok(())
            }
            Err(err) => {
                error!(task_id, status = ?err.status(), error = %err, "failed to fetch comments");
                self.notices.push(Notice::error("Failed to load comments"));
                Err(SyncError::load("comments")(err))
            }
        }
    }

    // ---- tasks -------------------------------------------------------

    pub async fn create_task(&mut self, input: TaskInput) -> Result<Task> {
        self.validate(require_title(&input))?;

        match self.api.create_task(&input).await {
            Ok(task) => {
                info!(task_id = %task.id, "task created");
                self.comments.entry(task.id.clone()).or_default();
                self.tasks.push(task.clone());
                self.notices.push(Notice::success("Task added"));
                Ok(task)
            }
            Err(err) => Err(self.save_failed("task", "Failed to save task", err)),
        }
    }

    /// Replace the task with the server's representation of the update
    pub async fn update_task(&mut self, id: &str, input: TaskInput) -> Result<Task> {
        self.validate(require_title(&input))?;

        match self.api.update_task(id, &input).await {
            Ok(task) => {
                info!(task_id = %task.id, "task updated");
                match self.tasks.iter_mut().find(|existing| existing.id == id) {
                    Some(slot) => *slot = task.clone(),
                    None => warn!(task_id = id, "updated task no longer in mirror"),
                }
                self.task_edit.clear_if_editing(id);
                self.notices.push(Notice::success("Task updated"));
                Ok(task)
            }
            Err(err) => Err(self.save_failed("task", "Failed to save task", err)),
        }
    }

    /// Delete a task and drop its comment bucket, once `gate` agrees
    pub async fn delete_task(&mut self, id: &str, gate: &dyn ConfirmGate) -> Result<Deletion> {
        if !gate.confirm(DELETE_TASK_PROMPT) {
            return Ok(Deletion::Cancelled);
        }

        match self.api.delete_task(id).await {
            Ok(()) => {
                info!(task_id = id, "task deleted");
                self.tasks.retain(|task| task.id != id);
                let removed = self.comments.remove(id).unwrap_or_default();
                let editing_removed = self
                    .comment_edit
                    .editing_id()
                    .is_some_and(|editing| removed.iter().any(|comment| comment.id == editing));
                if editing_removed {
                    self.comment_edit.cancel();
                }
                self.open_comment_forms.remove(id);
                self.task_edit.clear_if_editing(id);
                self.notices.push(Notice::success("Task deleted"));
                Ok(Deletion::Deleted)
            }
            Err(err) => {
                error!(task_id = id, status = ?err.status(), error = %err, "failed to delete task");
                self.notices.push(Notice::error("Failed to delete task"));
                Err(SyncError::delete("task")(err))
            }
        }
    }

    // ---- comments ----------------------------------------------------

    pub async fn create_comment(
        &mut self,
        task_id: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Comment> {
        self.validate(require_content(content))?;
        self.ensure_task(task_id)?;

        let req = NewCommentRequest {
            task_id: task_id.to_string(),
            content: content.to_string(),
            author: resolve_author(author),
        };
        match self.api.create_comment(&req).await {
            Ok(comment) => {
                info!(task_id, comment_id = %comment.id, "comment created");
                self.comments
                    .entry(task_id.to_string())
                    .or_default()
                    .push(comment.clone());
                self.notices.push(Notice::success("Comment added"));
                Ok(comment)
            }
            Err(err) => Err(self.save_failed("comment", "Failed to save comment", err)),
        }
    }

    /// Replace the comment with the server's representation of the edit
    pub async fn update_comment(
        &mut self,
        id: &str,
        task_id: &str,
        content: &str,
    ) -> Result<Comment> {
        self.validate(require_content(content))?;
        self.ensure_task(task_id)?;

        let req = UpdateCommentRequest {
            content: content.to_string(),
        };
        match self.api.update_comment(id, &req).await {
            Ok(comment) => {
                info!(task_id, comment_id = id, "comment updated");
                let slot = self
                    .comments
                    .get_mut(task_id)
                    .and_then(|bucket| bucket.iter_mut().find(|existing| existing.id == id));
                match slot {
                    Some(slot) => *slot = comment.clone(),
                    None => warn!(task_id, comment_id = id, "updated comment no longer in mirror"),
                }
                self.comment_edit.clear_if_editing(id);
                self.notices.push(Notice::success("Comment updated"));
                Ok(comment)
            }
            Err(err) => Err(self.save_failed("comment", "Failed to save comment", err)),
        }
    }

    pub async fn delete_comment(
        &mut self,
        id: &str,
        task_id: &str,
        gate: &dyn ConfirmGate,
    ) -> Result<Deletion> {
        if !gate.confirm(DELETE_COMMENT_PROMPT) {
            return Ok(Deletion::Cancelled);
        }

        match self.api.delete_comment(id).await {
            Ok(()) => {
                info!(task_id, comment_id = id, "comment deleted");
                if let Some(bucket) = self.comments.get_mut(task_id) {
                    bucket.retain(|comment| comment.id != id);
                }
                self.comment_edit.clear_if_editing(id);
                self.notices.push(Notice::success("Comment deleted"));
                Ok(Deletion::Deleted)
            }
            Err(err) => {
                error!(
                    comment_id = id,
                    status = ?err.status(),
                    error = %err,
                    "failed to delete comment",
                );
                self.notices.push(Notice::error("Failed to delete comment"));
                Err(SyncError::delete("comment")(err))
            }
        }
    }

    // ---- editing selection -------------------------------------------

    /// Load a task into the task form for editing
    pub fn start_task_edit(&mut self, id: &str) -> Result<&TaskDraft> {
        let task = self
            .task(id)
            .ok_or_else(|| SyncError::UnknownTask(id.to_string()))?;
        let draft = TaskDraft::from_task(task);
        self.task_edit.start(id, draft);
        self.task_edit
            .draft()
            .ok_or_else(|| SyncError::UnknownTask(id.to_string()))
    }

    pub fn cancel_task_edit(&mut self) {
        self.task_edit.cancel();
    }

    /// Submit the task form: update the task being edited, or create a new one
    pub async fn submit_task_draft(&mut self, draft: TaskDraft) -> Result<Task> {
        let input = draft.to_input();
        match self.task_edit.editing_id().map(str::to_string) {
            Some(id) => self.update_task(&id, input).await,
            None => self.create_task(input).await,
        }
    }

    /// Load a comment into the comment form for editing
    pub fn start_comment_edit(&mut self, id: &str, task_id: &str) -> Result<&CommentDraft> {
        let comment = self
            .comments_for(task_id)
            .and_then(|bucket| bucket.iter().find(|comment| comment.id == id))
            .ok_or_else(|| SyncError::UnknownComment(id.to_string()))?;
        let draft = CommentDraft::from_comment(comment);
        self.comment_edit.start(id, draft);
        self.open_comment_forms.insert(task_id.to_string());
        self.comment_edit
            .draft()
            .ok_or_else(|| SyncError::UnknownComment(id.to_string()))
    }

    pub fn cancel_comment_edit(&mut self) {
        self.comment_edit.cancel();
    }

    /// Submit the comment form of `task_id`: update the comment being edited,
    /// or add a new one. An edit is applied to the bucket that holds the
    /// comment, whichever form it was submitted through. The form closes on
    /// success.
    pub async fn submit_comment_draft(
        &mut self,
        task_id: &str,
        draft: CommentDraft,
    ) -> Result<Comment> {
        let comment = match self.comment_edit.editing_id().map(str::to_string) {
            Some(id) => {
                let owner = self
                    .comment_owner(&id)
                    .ok_or_else(|| SyncError::UnknownComment(id.clone()))?;
                let comment = self.update_comment(&id, &owner, &draft.content).await?;
                self.open_comment_forms.remove(&owner);
                comment
            }
            None => {
                self.create_comment(task_id, &draft.content, Some(&draft.author))
                    .await?
            }
        };
        self.open_comment_forms.remove(task_id);
        Ok(comment)
    }

    // ---- inline comment form ---------------------------------------

    /// Show or hide the inline comment form under a task. Closing the form
    /// abandons any comment edit, and so does opening the form of a task that
    /// does not own the comment being edited.
    pub fn toggle_comment_form(&mut self, task_id: &str) -> Result<bool> {
        self.ensure_task(task_id)?;
        if self.open_comment_forms.remove(task_id) {
            self.comment_edit.cancel();
            return Ok(false);
        }

        let foreign_edit = self
            .comment_edit
            .editing_id()
            .is_some_and(|id| self.comment_owner(id).as_deref() != Some(task_id));
        if foreign_edit {
            self.comment_edit.cancel();
        }
        self.open_comment_forms.insert(task_id.to_string());
        Ok(true)
    }

    pub fn is_comment_form_open(&self, task_id: &str) -> bool {
        self.open_comment_forms.contains(task_id)
    }

    // ---- helpers -----------------------------------------------------

    /// Task whose bucket holds comment `id`
    fn comment_owner(&self, id: &str) -> Option<String> {
        self.comments
            .iter()
            .find(|(_, bucket)| bucket.iter().any(|comment| comment.id == id))
            .map(|(task_id, _)| task_id.clone())
    }

    fn ensure_task(&self, task_id: &str) -> Result<()> {
        if self.task(task_id).is_none() {
            return Err(SyncError::UnknownTask(task_id.to_string()));
        }
        Ok(())
    }

    fn validate(&mut self, check: std::result::Result<(), ValidationFailure>) -> Result<()> {
        if let Err(failure) = check {
            self.notices.push(Notice::warning(failure.to_string()));
            return Err(failure.into());
        }
        Ok(())
    }

    fn save_failed(
        &mut self,
        what: &'static str,
        notice: &str,
        err: taskboard_adapter::TaskboardError,
    ) -> SyncError {
        error!(what, status = ?err.status(), error = %err, "failed to save");
        self.notices.push(Notice::error(notice));
        SyncError::save(what)(err)
    }
}
