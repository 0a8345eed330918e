//! Fake transport gateway for controller tests.
//!
//! Routes are matched by substring in registration order. A route can be
//! gated so the test decides when (and in which order) responses arrive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::ports::{RawResponse, TransportError, TransportGateway};

/// Releases a gated response.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    fn new() -> Self {
        Self(Arc::new(Semaphore::new(0)))
    }

    /// Let one waiting request complete.
    pub fn open(&self) {
        self.0.add_permits(1);
    }

    async fn wait(&self) {
        if let Ok(permit) = self.0.acquire().await {
            permit.forget();
        }
    }
}

struct Route {
    pattern: String,
    outcome: Result<RawResponse, TransportError>,
    gate: Option<Gate>,
}

/// A fake gateway that returns canned outcomes and records every call.
#[derive(Default)]
pub struct FakeGateway {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<String>>,
}

impl FakeGateway {
    /// Create a gateway with no routes; unmatched paths get a 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to paths containing `pattern` with `status` and a JSON body.
    pub fn with_json(self, pattern: &str, status: u16, json: &serde_json::Value) -> Self {
        self.with_outcome(pattern, Ok(RawResponse::new(status, json.to_string())), None)
    }

    /// Respond to paths containing `pattern` with a transport error.
    pub fn with_error(self, pattern: &str, error: TransportError) -> Self {
        self.with_outcome(pattern, Err(error), None)
    }

    /// Respond to paths containing `pattern` with a raw response.
    pub fn with_raw(self, pattern: &str, response: RawResponse) -> Self {
        self.with_outcome(pattern, Ok(response), None)
    }

    /// Like [`Self::with_json`], but hold the response until the gate opens.
    pub fn with_gated_json(
        self,
        pattern: &str,
        status: u16,
        json: &serde_json::Value,
    ) -> (Self, Gate) {
        let gate = Gate::new();
        let gateway = self.with_outcome(
            pattern,
            Ok(RawResponse::new(status, json.to_string())),
            Some(gate.clone()),
        );
        (gateway, gate)
    }

    fn with_outcome(
        self,
        pattern: &str,
        outcome: Result<RawResponse, TransportError>,
        gate: Option<Gate>,
    ) -> Self {
        self.routes.lock().unwrap().push(Route {
            pattern: pattern.to_string(),
            outcome,
            gate,
        });
        self
    }

    /// Paths requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn find(&self, path: &str) -> Option<(Result<RawResponse, TransportError>, Option<Gate>)> {
        self.routes
            .lock()
            .unwrap()
            .iter()
            .find(|route| path.contains(&route.pattern))
            .map(|route| (route.outcome.clone(), route.gate.clone()))
    }
}

#[async_trait]
impl TransportGateway for FakeGateway {
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push(path.to_string());

        let Some((outcome, gate)) = self.find(path) else {
            return Ok(RawResponse::new(404, r#"{"message":"Not Found"}"#));
        };

        if let Some(gate) = gate {
            gate.wait().await;
        }
        outcome
    }
}

/// A gateway whose requests never complete.
///
/// Counts requests that are still alive, so tests can see a request task
/// being aborted.
#[derive(Default)]
pub struct HangingGateway {
    live: Arc<AtomicUsize>,
}

impl HangingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests started and not yet dropped.
    pub fn live_requests(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

struct LiveRequest(Arc<AtomicUsize>);

impl Drop for LiveRequest {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TransportGateway for HangingGateway {
    async fn get(&self, _path: &str) -> Result<RawResponse, TransportError> {
        self.live.fetch_add(1, Ordering::SeqCst);
        let _live = LiveRequest(self.live.clone());
        std::future::pending().await
    }
}

/// A gateway that panics inside the request task.
pub struct PanickingGateway;

#[async_trait]
impl TransportGateway for PanickingGateway {
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        panic!("gateway blew up on {path}");
    }
}

/// Yield until `condition` holds, failing the test after one second.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(std::time::Duration::from_secs(1), async {
        while !condition() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// JSON body for a `search/users` response.
pub fn search_json(ids: &[u64], total_count: u64) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "login": format!("user{id}"),
                "id": id,
                "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
            })
        })
        .collect();
    serde_json::json!({ "total_count": total_count, "items": items })
}
