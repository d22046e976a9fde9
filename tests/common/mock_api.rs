//! Mock character API for loader and CLI tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const CHARACTER_PATH: &str = "/api/character";

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "There is nothing here"}"#.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    hits: Arc<AtomicUsize>,
}

/// Serves one canned response on `/api/character` and counts requests.
pub struct MockApi {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockApi {
    pub async fn start(response: MockResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock API");
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            response,
            hits: Arc::clone(&hits),
        };
        let router = Router::new()
            .route(CHARACTER_PATH, get(handle))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            hits,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, CHARACTER_PATH)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
        .into_response()
}
