//! End-to-end tests for [`agora_client::HttpTransport`].
//!
//! Each test spawns an ephemeral in-process repository stub (real TCP, real
//! HTTP) on a background tokio runtime and drives the blocking client
//! against it. The stub records every request it receives so tests can
//! assert on the exact method, path, headers and body that went over the
//! wire.

use std::sync::{Arc, Mutex};

use agora_client::{AgoraClient, ClientError, Endpoint, EntityType, HttpTransport, ListFilter, NewEntity};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    uri: String,
    cookie: Option<String>,
    content_type: Option<String>,
    body: String,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

/// Canned repository behaviour keyed on method and path.
async fn repository(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    log.lock().unwrap().push(Recorded {
        method: method.clone(),
        uri: uri.to_string(),
        cookie: header("cookie"),
        content_type: header("content-type"),
        body: body.clone(),
    });

    match (method, uri.path()) {
        (Method::POST, "/methods") => {
            let mut entity: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            entity["snapshotId"] = json!(1);
            (StatusCode::CREATED, entity.to_string())
        }
        (Method::GET, "/methods/broad/hello/3") => (
            StatusCode::OK,
            json!({ "namespace": "broad", "name": "hello", "snapshotId": 3 }).to_string(),
        ),
        (Method::GET, "/methods") | (Method::GET, "/configurations") => {
            (StatusCode::OK, json!([{ "name": "hello" }]).to_string())
        }
        _ => (StatusCode::NOT_FOUND, "entity not found".to_string()),
    }
}

/// Start a stub on an OS-assigned port and return `(base_url, log)`.
fn spawn_repository() -> (String, Log) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.set_nonblocking(true).expect("set nonblocking");
    let addr = listener.local_addr().expect("get local addr");

    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .fallback(repository)
        .with_state(Arc::clone(&log));

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("adopt listener");
            axum::serve(listener, router).await.expect("stub server error");
        });
    });

    (format!("http://{addr}"), log)
}

fn client(base_url: &str) -> AgoraClient<HttpTransport> {
    AgoraClient::new(HttpTransport::new(base_url).unwrap(), "iPlanetDirectoryPro=token123")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn pull_issues_get_with_cookie_and_no_body() {
    let (base, log) = spawn_repository();
    let out = client(&base)
        .fetch(Endpoint::Methods, "broad", "hello", 3)
        .unwrap();
    assert_eq!(out["snapshotId"], 3);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, Method::GET);
    assert_eq!(log[0].uri, "/methods/broad/hello/3");
    assert_eq!(log[0].cookie.as_deref(), Some("iPlanetDirectoryPro=token123"));
    assert_eq!(log[0].content_type, None);
    assert!(log[0].body.is_empty());
}

#[test]
fn push_posts_json_body_and_returns_created_entity() {
    let (base, log) = spawn_repository();
    let entity = NewEntity {
        namespace: "broad".into(),
        name: "hello".into(),
        synopsis: "Prints a greeting".into(),
        documentation: "Usage notes.".into(),
        entity_type: EntityType::Workflow,
        payload: "workflow hello { call greet }".into(),
    };
    let out = client(&base).create(Endpoint::Methods, &entity).unwrap();
    assert_eq!(out["snapshotId"], 1);
    assert_eq!(out["synopsis"], "Prints a greeting");

    let log = log.lock().unwrap();
    assert_eq!(log[0].method, Method::POST);
    assert_eq!(log[0].uri, "/methods");
    assert_eq!(log[0].content_type.as_deref(), Some("application/json"));
    let sent: NewEntity = serde_json::from_str(&log[0].body).unwrap();
    assert_eq!(sent, entity);
}

#[test]
fn list_sends_query_string() {
    let (base, log) = spawn_repository();
    let filter = ListFilter {
        included_fields: vec!["name".into(), "synopsis".into()],
        namespace: Some("broad".into()),
        ..Default::default()
    };
    let out = client(&base).list(Endpoint::Configurations, &filter).unwrap();
    assert!(out.is_array());

    let log = log.lock().unwrap();
    assert_eq!(
        log[0].uri,
        "/configurations?includedField=name&includedField=synopsis&namespace=broad"
    );
}

#[test]
fn unexpected_status_carries_diagnostics() {
    let (base, _log) = spawn_repository();
    let err = client(&base)
        .fetch(Endpoint::Methods, "broad", "missing", 9)
        .unwrap_err();
    match &err {
        ClientError::UnexpectedStatus {
            url,
            status,
            reason,
            body,
            request_body,
        } => {
            assert_eq!(url, &format!("{base}/methods/broad/missing/9"));
            assert_eq!(*status, 404);
            assert_eq!(reason, "Not Found");
            assert_eq!(body, "entity not found");
            assert_eq!(request_body, &None);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert!(err.to_string().contains("404 Not Found entity not found"));
}

#[test]
fn connection_failure_is_an_http_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = client(&format!("http://{addr}"))
        .list(Endpoint::Methods, &ListFilter::default())
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
