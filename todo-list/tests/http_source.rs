//! Tests for the HTTP todo source against a local mock server

#![allow(clippy::unwrap_used)] // Test code can use unwrap

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use todo_list::{
    HttpTodoSource, LoadStatus, SourceError, TodoItem, TodoListAction, TodoListConfig,
    TodoListEnvironment, TodoListReducer, TodoListState, TodoSource,
};
use todo_list_runtime::Store;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn remote_todos(count: u64) -> serde_json::Value {
    let todos: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "userId": 1,
                "id": id,
                "title": format!("todo {id}"),
                "completed": id % 2 == 0,
            })
        })
        .collect();
    json!(todos)
}

#[tokio::test]
async fn test_fetch_decodes_remote_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_todos(3)))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpTodoSource::new(format!("{}/todos", server.uri()));
    let items = source.fetch_todos().await.unwrap();

    assert_eq!(
        items,
        vec![
            TodoItem::new("todo 1"),
            TodoItem {
                title: "todo 2".to_string(),
                completed: true,
            },
            TodoItem::new("todo 3"),
        ]
    );
}

#[tokio::test]
async fn test_fetch_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;

    let source = HttpTodoSource::new(format!("{}/todos", server.uri()));
    let error = source.fetch_todos().await.unwrap_err();

    assert_eq!(
        error,
        SourceError::Status {
            status: 500,
            message: "down".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fetch_reports_bad_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let source = HttpTodoSource::new(format!("{}/todos", server.uri()));
    let error = source.fetch_todos().await.unwrap_err();

    assert!(matches!(error, SourceError::ResponseParseFailed(_)));
}

#[tokio::test]
async fn test_fetch_reports_transport_failure() {
    // Nothing listens on the discard port
    let source = HttpTodoSource::new("http://127.0.0.1:9/todos");
    let error = source.fetch_todos().await.unwrap_err();

    assert!(matches!(error, SourceError::RequestFailed(_)));
}

#[tokio::test]
async fn test_controller_loads_from_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_todos(200)))
        .expect(1)
        .mount(&server)
        .await;

    let config = TodoListConfig::default().with_endpoint(format!("{}/todos", server.uri()));
    let env = TodoListEnvironment::new(Arc::new(HttpTodoSource::from_config(&config)), config);
    let store = Store::new(TodoListState::new(), TodoListReducer::new(), env);

    let mut handle = store.send(TodoListAction::Initialize).await.unwrap();
    handle.wait_with_timeout(Duration::from_secs(5)).await.unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.load, LoadStatus::Loaded { count: 5 });
    assert_eq!(state.todos.items()[4].title, "todo 5");
}
