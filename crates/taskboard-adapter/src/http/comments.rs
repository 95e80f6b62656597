/*
[INPUT]:  Task ids, comment ids and comment bodies
[OUTPUT]: Server-assigned Comment records
[POS]:    HTTP layer - comment collection endpoints
[UPDATE]: When adding comment endpoints or changing response format
*/

use crate::http::{Result, TaskboardClient};
use crate::types::{Comment, NewCommentRequest, UpdateCommentRequest};
use reqwest::Method;

impl TaskboardClient {
    /// List the comments of one task
    ///
    /// GET /api/comments?task_id={task_id}
    pub async fn list_comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        let builder = self
            .request(Method::GET, &["api", "comments"])?
            .query(&[("task_id", task_id)]);
        self.send_json(builder).await
    }

    /// Fetch a single comment
    ///
    /// GET /api/comments/{id}
    pub async fn get_comment(&self, id: &str) -> Result<Comment> {
        let builder = self.request(Method::GET, &["api", "comments", id])?;
        self.send_json(builder).await
    }

    /// Create a comment
    ///
    /// POST /api/comments
    pub async fn create_comment(&self, req: &NewCommentRequest) -> Result<Comment> {
        let builder = self.request(Method::POST, &["api", "comments"])?.json(req);
        self.send_json(builder).await
    }

    /// Edit a comment's content
    ///
    /// PUT /api/comments/{id}
    pub async fn update_comment(&self, id: &str, req: &UpdateCommentRequest) -> Result<Comment> {
        let builder = self.request(Method::PUT, &["api", "comments", id])?.json(req);
        self.send_json(builder).await
    }

    /// Delete a comment
    ///
    /// DELETE /api/comments/{id}
    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["api", "comments", id])?;
        self.send_delete(builder).await
    }
}
