/*
[INPUT]:  TaskApi calls from tests and offline callers
[OUTPUT]: In-memory tasks/comments with server-style ids and timestamps
[POS]:    API seam - mock remote store
[UPDATE]: When TaskApi changes or tests need new failure modes
*/

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use super::TaskApi;
use crate::http::{Result, TaskboardError};
use crate::types::{
    Comment, NewCommentRequest, Task, TaskInput, TaskStatus, UpdateCommentRequest,
};

#[derive(Debug, Default)]
struct MockState {
    tasks: Vec<Task>,
    comments: Vec<Comment>,
    fail_next: usize,
    failing_comment_tasks: HashSet<String>,
    update_status_override: Option<TaskStatus>,
}

/// Mock remote store for testing
///
/// Behaves like the REST backend: assigns ids and timestamps, filters
/// comments by task, and reports unknown ids as not found. Every call is
/// counted so callers can assert that no request was issued.
#[derive(Debug, Default)]
pub struct MockTaskApi {
    state: Mutex<MockState>,
    calls: AtomicUsize,
}

impl MockTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task directly, bypassing the call counter
    pub fn seed_task(&self, input: TaskInput) -> Task {
        let task = new_task(input);
        self.state().tasks.push(task.clone());
        task
    }

    /// Insert a comment directly, bypassing the call counter
    pub fn seed_comment(&self, task_id: &str, content: &str, author: &str) -> Comment {
        let comment = new_comment(NewCommentRequest {
            task_id: task_id.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        });
        self.state().comments.push(comment.clone());
        comment
    }

    /// Fail the next `count` calls with a 503
    pub fn fail_next(&self, count: usize) {
        self.state().fail_next = count;
    }

    /// Fail every comment listing for `task_id`
    pub fn fail_comments_for(&self, task_id: &str) {
        self.state().failing_comment_tasks.insert(task_id.to_string());
    }

    /// Make task updates answer with `status` regardless of the request
    pub fn override_update_status(&self, status: TaskStatus) {
        self.state().update_status_override = Some(status);
    }

    /// Number of TaskApi calls received
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored tasks
    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.clone()
    }

    /// Snapshot of the stored comments
    pub fn comments(&self) -> Vec<Comment> {
        self.state().comments.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Count the call and consume an injected failure, if any
    fn begin(&self) -> Result<MutexGuard<'_, MockState>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state();
        if state.fail_next > 0 {
            state.fail_next -= 1;
            return Err(TaskboardError::api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "injected failure",
            ));
        }
        Ok(state)
    }
}

fn new_task(input: TaskInput) -> Task {
    let now = Utc::now();
    Task {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        status: input.status,
        created_at: now,
        updated_at: Some(now),
    }
}

fn new_comment(req: NewCommentRequest) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4().to_string(),
        task_id: req.task_id,
        content: req.content,
        author: req.author,
        created_at: now,
        updated_at: Some(now),
    }
}

fn not_found(kind: &'static str, id: &str) -> TaskboardError {
    TaskboardError::NotFound {
        kind,
        id: id.to_string(),
    }
}

#[async_trait]
impl TaskApi for MockTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let state = self.begin()?;
        Ok(state.tasks.clone())
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        let state = self.begin()?;
        state
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or_else(|| not_found("task", id))
    }

    async fn create_task(&self, input: &TaskInput) -> Result<Task> {
        let mut state = self.begin()?;
        let task = new_task(input.clone());
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &str, input: &TaskInput) -> Result<Task> {
        let mut state = self.begin()?;
        let status = state.update_status_override.unwrap_or(input.status);
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found("task", id))?;
        task.title = input.title.clone();
        task.description = input.description.clone();
        task.status = status;
        task.updated_at = Some(Utc::now());
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        let mut state = self.begin()?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        if state.tasks.len() == before {
            return Err(not_found("task", id));
        }
        Ok(())
    }

    async fn list_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        let state = self.begin()?;
        if state.failing_comment_tasks.contains(task_id) {
            return Err(TaskboardError::api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "injected comment failure",
            ));
        }
        Ok(state
            .comments
            .iter()
            .filter(|comment| comment.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn get_comment(&self, id: &str) -> Result<Comment> {
        let state = self.begin()?;
        state
            .comments
            .iter()
            .find(|comment| comment.id == id)
            .cloned()
            .ok_or_else(|| not_found("comment", id))
    }

    async fn create_comment(&self, req: &NewCommentRequest) -> Result<Comment> {
        let mut state = self.begin()?;
        let comment = new_comment(req.clone());
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_comment(&self, id: &str, req: &UpdateCommentRequest) -> Result<Comment> {
        let mut state = self.begin()?;
        let comment = state
            .comments
            .iter_mut()
            .find(|comment| comment.id == id)
            .ok_or_else(|| not_found("comment", id))?;
        comment.content = req.content.clone();
        comment.updated_at = Some(Utc::now());
        Ok(comment.clone())
    }

    async fn delete_comment(&self, id: &str) -> Result<()> {
        let mut state = self.begin()?;
        let before = state.comments.len();
        state.comments.retain(|comment| comment.id != id);
        if state.comments.len() == before {
            return Err(not_found("comment", id));
        }
        Ok(())
    }
}
