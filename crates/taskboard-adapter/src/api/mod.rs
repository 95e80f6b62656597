/*
[INPUT]:  Task/comment operations requested by the synchronizer
[OUTPUT]: Server-authoritative Task and Comment records
[POS]:    API seam - abstraction over the remote resource store
[UPDATE]: When the backend contract gains or loses operations
*/

pub mod memory;

use async_trait::async_trait;

use crate::http::{Result, TaskboardClient};
use crate::types::{Comment, NewCommentRequest, Task, TaskInput, UpdateCommentRequest};

pub use memory::MockTaskApi;

/// Remote task/comment store
///
/// Implemented over HTTP by [`TaskboardClient`] and in memory by
/// [`MockTaskApi`]. Every method maps to one REST call.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    async fn get_task(&self, id: &str) -> Result<Task>;

    async fn create_task(&self, input: &TaskInput) -> Result<Task>;

    async fn update_task(&self, id: &str, input: &TaskInput) -> Result<Task>;

    async fn delete_task(&self, id: &str) -> Result<()>;

    async fn list_comments(&self, task_id: &str) -> Result<Vec<Comment>>;

    async fn get_comment(&self, id: &str) -> Result<Comment>;

    async fn create_comment(&self, req: &NewCommentRequest) -> Result<Comment>;

    async fn update_comment(&self, id: &str, req: &UpdateCommentRequest) -> Result<Comment>;

    async fn delete_comment(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl TaskApi for TaskboardClient {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        TaskboardClient::list_tasks(self).await
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        TaskboardClient::get_task(self, id).await
    }

    async fn create_task(&self, input: &TaskInput) -> Result<Task> {
        TaskboardClient::create_task(self, input).await
    }

    async fn update_task(&self, id: &str, input: &TaskInput) -> Result<Task> {
        TaskboardClient::update_task(self, id, input).await
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        TaskboardClient::delete_task(self, id).await
    }

    async fn list_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        TaskboardClient::list_comments(self, task_id).await
    }

    async fn get_comment(&self, id: &str) -> Result<Comment> {
        TaskboardClient::get_comment(self, id).await
    }

    async fn create_comment(&self, req: &NewCommentRequest) -> Result<Comment> {
        TaskboardClient::create_comment(self, req).await
    }

    async fn update_comment(&self, id: &str, req: &UpdateCommentRequest) -> Result<Comment> {
        TaskboardClient::update_comment(self, id, req).await
    }

    async fn delete_comment(&self, id: &str) -> Result<()> {
        TaskboardClient::delete_comment(self, id).await
    }
}
