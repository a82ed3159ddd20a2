//! Shared helpers for lounge-tv-axum tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use lounge_tv_axum::{AxumContext, create_router};
use lounge_tv_core::{CommandRunner, Invocation, RunnerError, TvConfig};
use tower::ServiceExt;

pub const TEST_COMMAND: &str = "sony-bravia-cli";
pub const TEST_DEVICE: &str = "/dev/ttyUSB0";

/// Runner that records invocations instead of spawning anything.
pub struct FakeRunner {
    calls: Mutex<Vec<Invocation>>,
    reply: Result<Vec<u8>, RunnerError>,
}

impl FakeRunner {
    pub fn succeeding(stdout: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            reply: Ok(stdout.to_vec()),
        })
    }

    pub fn failing(err: RunnerError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(vec![]),
            reply: Err(err),
        })
    }

    /// Recorded command lines, rendered as `program arg...`.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunnerError> {
        self.calls.lock().unwrap().push(invocation.clone());
        self.reply.clone()
    }
}

/// Router wired to `runner` with the default test executable and device.
pub fn app(runner: Arc<FakeRunner>) -> Router {
    let ctx = AxumContext::new(TvConfig::new(TEST_COMMAND, TEST_DEVICE), runner);
    create_router(ctx)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = body_bytes(response).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| panic!("Expected valid JSON body: {e}"))
}
