/*
[INPUT]:  TaskStore bound to TaskboardClient and a wiremock backend
[OUTPUT]: End-to-end verification of request flow and local reconciliation
[POS]:    Integration test layer - full stack over HTTP
[UPDATE]: When wire format or store request flow changes
*/

use serde_json::json;
use taskboard_adapter::{ClientConfig, TaskInput, TaskStatus, TaskboardClient};
use taskboard_sync::{Deletion, StatusFilter, TaskStore};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREATED_AT: &str = "2024-06-04T10:00:00.000000+00:00";

fn store_for(server: &MockServer) -> TaskStore<TaskboardClient> {
    let client = TaskboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    TaskStore::new(client)
}

fn task_json(id: &str, title: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "id": id,
        "title": title,
        "description": "",
        "status": status,
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT
    })
}

fn comment_json(id: &str, task_id: &str, content: &str, author: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "id": id,
        "task_id": task_id,
        "content": content,
        "author": author,
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT
    })
}

#[tokio::test]
async fn test_end_to_end_task_with_comment_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(body_json(json!({
            "title": "Buy milk",
            "description": "",
            "status": "pending"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(task_json("t1", "Buy milk", "pending")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .and(body_partial_json(json!({
            "task_id": "t1",
            "content": "urgent",
            "author": "Anonymous"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(comment_json("c1", "t1", "urgent", "Anonymous")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/t1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Task and associated comments deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store_for(&server);

    assert_ok!(store.load_tasks().await);
    assert!(store.tasks().is_empty());
    assert!(store.visible_tasks().is_empty());

    let task = assert_ok!(store.create_task(TaskInput::new("Buy milk")).await);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(task.id, "t1");
    assert_eq!(task.created_at.to_rfc3339(), "2024-06-04T10:00:00+00:00");

    let comment = assert_ok!(store.create_comment("t1", "urgent", None).await);
    assert_eq!(comment.author, "Anonymous");
    assert_eq!(store.comments_for("t1").map(<[_]>::len), Some(1));

    let outcome = assert_ok!(store.delete_task("t1", &true).await);
    assert_eq!(outcome, Deletion::Deleted);
    assert!(store.comments_for("t1").is_none());
    assert!(store.tasks().is_empty());
}

#[tokio::test]
async fn test_validation_failures_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    assert!(assert_err!(store.create_task(TaskInput::new("")).await).is_validation());
    assert!(assert_err!(store.create_comment("t1", "  ", Some("Ann")).await).is_validation());
}

#[tokio::test]
async fn test_load_fetches_each_task_bucket() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            task_json("t1", "one", "pending"),
            task_json("t2", "two", "completed"),
            task_json("t3", "three", "in-progress")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .and(query_param("task_id", "t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            comment_json("c1", "t1", "first", "Ann"),
            comment_json("c2", "t1", "second", "Bo")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .and(query_param("task_id", "t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .and(query_param("task_id", "t3"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "database unavailable"})),
        )
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    assert_ok!(store.load_tasks().await);

    assert_eq!(store.tasks().len(), 3);
    assert_eq!(store.comments_for("t1").map(<[_]>::len), Some(2));
    assert_eq!(store.comments_for("t2").map(<[_]>::len), Some(0));
    assert!(store.comments_for("t3").is_none());

    store.set_filter(StatusFilter::Only(TaskStatus::Completed));
    let visible: Vec<&str> = store
        .visible_tasks()
        .iter()
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(visible, vec!["t2"]);
}

#[tokio::test]
async fn test_update_applies_server_response_not_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([task_json("t1", "old", "pending")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/t1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(task_json("t1", "new", "completed")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    assert_ok!(store.load_tasks().await);

    let input = TaskInput::new("new").with_status(TaskStatus::InProgress);
    assert_ok!(store.update_task("t1", input).await);

    let task = store.task("t1").expect("task");
    assert_eq!(task.title, "new");
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_server_error_on_delete_keeps_task() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([task_json("t1", "keep", "pending")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/t1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    assert_ok!(store.load_tasks().await);
    store.take_notices();

    let err = assert_err!(store.delete_task("t1", &true).await);

    assert!(err.is_remote());
    assert!(store.task("t1").is_some());
    assert_eq!(store.comments_for("t1").map(<[_]>::len), Some(0));
    let notices = store.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "Failed to delete task");
}
