#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use tempfile::TempDir;

use courtbook::models::{ArrivalStatus, Booking, CourtRef};

pub fn cb() -> Command {
    cargo_bin_cmd!("courtbook")
}

/// Unsigned JWT with the claims the backend issues.
pub fn make_token(exp: i64, role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = serde_json::json!({
        "exp": exp,
        "user": {
            "id": "u1",
            "name": "Ana",
            "email": "ana@example.com",
            "role": role
        }
    });
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.signature")
}

/// Token valid for an hour from now.
pub fn fresh_token(role: &str) -> String {
    make_token(chrono::Utc::now().timestamp() + 3600, role)
}

pub fn expired_token(role: &str) -> String {
    make_token(chrono::Utc::now().timestamp() - 60, role)
}

pub fn booking(id: &str, date: &str, slot: &str, client: &str) -> Booking {
    Booking {
        id: id.to_string(),
        court: CourtRef::Id("c1".to_string()),
        date: date.to_string(),
        time_slot: slot.to_string(),
        client_name: client.to_string(),
        client: None,
        deposit: 0.0,
        deposit_note: None,
        status: ArrivalStatus::NotArrived,
        is_permanent: false,
        permanent_end_date: None,
    }
}

/// Isolated HOME with its own config directory and token file.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".courtbook")
    }

    pub fn token_path(&self) -> PathBuf {
        self.config_dir().join("session.token")
    }

    pub fn store_token(&self, token: &str) {
        fs::create_dir_all(self.config_dir()).expect("create config dir");
        fs::write(self.token_path(), token).expect("write token");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cb();
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("COURTBOOK_LOG");
        cmd
    }

    /// Command pointed at a stub backend.
    pub fn cmd_with(&self, server: &StubServer) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--api-url", &server.base_url()]);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path plus query string, e.g. `/api/courts?x=1`.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

struct Route {
    method: String,
    path: String,
    status: u16,
    /// Served in order; the last one repeats.
    bodies: Vec<Vec<u8>>,
    served: usize,
}

impl Route {
    fn next_body(&mut self) -> Vec<u8> {
        let i = self.served.min(self.bodies.len().saturating_sub(1));
        self.served += 1;
        self.bodies.get(i).cloned().unwrap_or_default()
    }
}

/// Canned-response HTTP server on a local port, recording every request.
/// The base URL ends in `/api`, like the real backend.
pub struct StubServer {
    port: u16,
    state: StubState,
}

#[derive(Clone, Default)]
struct StubState {
    routes: Arc<Mutex<Vec<Route>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(respond).with_state(state.clone());

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub server");
                tx.send(listener.local_addr().expect("local addr").port())
                    .expect("report stub port");
                axum::serve(listener, app).await.expect("serve stub");
            });
        });

        let port = rx.recv().expect("stub server port");
        Self { port, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api", self.port)
    }

    /// Answer `method path` (no query) with `status` and a JSON body.
    /// Later routes take precedence over earlier ones.
    pub fn route(&self, method: &str, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.route_bytes(method, path, status, body.to_string().into_bytes())
    }

    pub fn route_bytes(&self, method: &str, path: &str, status: u16, body: Vec<u8>) -> &Self {
        self.push_route(method, path, status, vec![body])
    }

    /// Successive JSON bodies for the same route, e.g. before and after a save.
    pub fn route_sequence(&self, method: &str, path: &str, bodies: Vec<serde_json::Value>) -> &Self {
        let bodies = bodies.into_iter().map(|b| b.to_string().into_bytes()).collect();
        self.push_route(method, path, 200, bodies)
    }

    fn push_route(&self, method: &str, path: &str, status: u16, bodies: Vec<Vec<u8>>) -> &Self {
        self.state.routes.lock().unwrap().push(Route {
            method: method.to_string(),
            path: format!("/api{path}"),
            status,
            bodies,
            served: 0,
        });
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        let full = format!("/api{path}");
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path() == full)
            .collect()
    }
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let headers = headers
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();
    state.requests.lock().unwrap().push(Recorded {
        method: method.as_str().to_string(),
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, payload) = state
        .routes
        .lock()
        .unwrap()
        .iter_mut()
        .rev()
        .find(|r| r.method == method.as_str() && r.path == uri.path())
        .map(|r| (r.status, r.next_body()))
        .unwrap_or((404, br#"{"msg":"not found"}"#.to_vec()));

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], payload).into_response()
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}
