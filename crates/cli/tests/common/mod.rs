//! In-process stub solver for integration tests.
//!
//! Serves `POST /{endpoint}` with `axum` on an ephemeral loopback port from
//! a background thread so the `oracle-harness` binary has something to hit.
//! The binary only needs a hit count; request recording and the
//! transport edge cases stay in the harness crate's own stub.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::sync::oneshot;

/// How the stub answers each request.
#[derive(Clone)]
pub enum Behavior {
    /// Classify the Deutsch input correctly.
    Solve,
    /// Always reply with this status and raw body.
    Reply { status: u16, body: String },
}

struct StubState {
    behavior: Behavior,
    hits: AtomicUsize,
}

pub struct StubSolver {
    pub base_url: String,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubSolver {
    pub fn start(behavior: Behavior) -> StubSolver {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener
            .set_nonblocking(true)
            .expect("set listener non-blocking");
        let addr = listener.local_addr().expect("local addr");

        let state = Arc::new(StubState {
            behavior,
            hits: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/{endpoint}", post(handle_solve))
            .with_state(state.clone());

        let (tx, rx) = oneshot::channel::<()>();
        let thread = std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build stub runtime");
            rt.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt std listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = rx.await;
                    })
                    .await
                    .expect("stub server");
            });
        });

        StubSolver {
            base_url: format!("http://{}", addr),
            state,
            shutdown: Some(tx),
            thread: Some(thread),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubSolver {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// A loopback URL nothing is listening on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/deutsch-classical", addr)
}

async fn handle_solve(
    State(state): State<Arc<StubState>>,
    body: String,
) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match &state.behavior {
        Behavior::Reply { status, body } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body.clone(),
        ),
        Behavior::Solve => match serde_json::from_str::<Vec<bool>>(&body) {
            Ok(inputs) if inputs.len() == 2 => {
                let answer = if inputs[0] == inputs[1] {
                    "constant"
                } else {
                    "balanced"
                };
                (
                    StatusCode::OK,
                    serde_json::json!({ "answer": answer }).to_string(),
                )
            }
            _ => (StatusCode::BAD_REQUEST, "expected json input".to_string()),
        },
    }
}
