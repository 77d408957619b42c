//! Shared helpers for integration tests: in-memory collaborators and upstream fakes.
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode, Uri},
    response::IntoResponse,
};
use dnd_game_back::{
    dao::{
        models::{NewPlayerEntity, PlayerRecord},
        player_store::PlayerStore,
        storage::{StorageError, StorageResult},
    },
    llm::{
        CompletionClient, LlmError, LlmResult,
        models::{ChatCompletionRequest, CompletionChoice, CompletionMessage},
    },
    routes,
    state::AppState,
};
use futures::future::BoxFuture;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Outcome a fake store replays for every call.
#[derive(Clone)]
pub enum StoreOutcome {
    Rows(Vec<Value>),
    Rejected(u16, Value),
    Unreachable(String),
}

impl StoreOutcome {
    fn replay(&self) -> StorageResult<Vec<PlayerRecord>> {
        match self {
            StoreOutcome::Rows(rows) => Ok(rows.clone()),
            StoreOutcome::Rejected(status, payload) => {
                Err(StorageError::rejected(*status, payload.clone()))
            }
            StoreOutcome::Unreachable(message) => Err(StorageError::unavailable(
                message.clone(),
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            )),
        }
    }
}

/// Player store answering from memory and recording inserts.
pub struct FakePlayerStore {
    outcome: StoreOutcome,
    inserted: Mutex<Vec<NewPlayerEntity>>,
}

impl FakePlayerStore {
    pub fn new(outcome: StoreOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            inserted: Mutex::new(Vec::new()),
        })
    }

    pub fn inserted(&self) -> Vec<NewPlayerEntity> {
        self.inserted.lock().unwrap().clone()
    }
}

impl PlayerStore for FakePlayerStore {
    fn list_players(&self) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>> {
        let result = self.outcome.replay();
        Box::pin(async move { result })
    }

    fn insert_player(
        &self,
        player: NewPlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerRecord>>> {
        self.inserted.lock().unwrap().push(player);
        let result = self.outcome.replay();
        Box::pin(async move { result })
    }
}

/// Outcome a fake completion client replays for every call.
#[derive(Clone)]
pub enum CompletionOutcome {
    Texts(Vec<Option<String>>),
    ApiError(String),
}

/// Completion client answering from memory and recording requests.
pub struct FakeCompletionClient {
    outcome: CompletionOutcome,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl FakeCompletionClient {
    pub fn new(outcome: CompletionOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn texts(texts: &[&str]) -> Arc<Self> {
        Self::new(CompletionOutcome::Texts(
            texts.iter().map(|text| Some(text.to_string())).collect(),
        ))
    }

    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'static, LlmResult<Vec<CompletionChoice>>> {
        self.requests.lock().unwrap().push(request);
        let result = match &self.outcome {
            CompletionOutcome::Texts(texts) => Ok(texts
                .iter()
                .map(|content| CompletionChoice {
                    message: Some(CompletionMessage {
                        content: content.clone(),
                    }),
                })
                .collect()),
            CompletionOutcome::ApiError(message) => Err(LlmError::Api {
                message: message.clone(),
            }),
        };
        Box::pin(async move { result })
    }
}

/// Build the application router over the given collaborators.
pub fn app(store: Arc<FakePlayerStore>, completions: Arc<FakeCompletionClient>) -> Router {
    routes::router(AppState::new(store, completions))
}

/// Drive one request through the router and decode the JSON answer.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Empty GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// POST request carrying a JSON body.
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request received by an [`Upstream`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// HTTP server on a loopback port replaying one canned response to every request.
pub struct Upstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Upstream {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            status,
            body: body.into(),
            captured: Arc::clone(&captured),
        };
        let app = Router::new().fallback(replay).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, captured }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn replay(
    State(state): State<UpstreamState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.captured.lock().unwrap().push(CapturedRequest {
        method,
        uri,
        headers,
        body,
    });
    (
        state.status,
        [("content-type", "application/json")],
        state.body,
    )
}

/// Loopback address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
