/*
[INPUT]:  Task ids and task input bodies
[OUTPUT]: Server-assigned Task records
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When adding task endpoints or changing response format
*/

use crate::http::{Result, TaskboardClient};
use crate::types::{Task, TaskInput};
use reqwest::Method;

impl TaskboardClient {
    /// List every task
    ///
    /// GET /api/tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, &["api", "tasks"])?;
        self.send_json(builder).await
    }

    /// Fetch a single task
    ///
    /// GET /api/tasks/{id}
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        let builder = self.request(Method::GET, &["api", "tasks", id])?;
        self.send_json(builder).await
    }

    /// Create a task
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, input: &TaskInput) -> Result<Task> {
        let builder = self.request(Method::POST, &["api", "tasks"])?.json(input);
        self.send_json(builder).await
    }

    /// Replace a task's editable fields
    ///
    /// PUT /api/tasks/{id}
    pub async fn update_task(&self, id: &str, input: &TaskInput) -> Result<Task> {
        let builder = self.request(Method::PUT, &["api", "tasks", id])?.json(input);
        self.send_json(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /api/tasks/{id}
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["api", "tasks", id])?;
        self.send_delete(builder).await
    }
}
