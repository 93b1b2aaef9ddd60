//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, CORS and response conversion for
//! `tiny_http`. Requests are served one at a time on the accept loop.

use std::io::{Cursor, Read};

use log::{debug, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use nonsense::Classifier;
use nonsense::api::{self, ApiError, BulkRequest, TestRequest};
use nonsense::config::BulkConfig;

/// Largest request body read, in bytes
const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Everything a request handler needs
#[derive(Debug)]
pub struct ServerState {
    classifier: Classifier,
    bulk: BulkConfig,
}

impl ServerState {
    /// Create server state around a classifier
    pub const fn new(classifier: Classifier, bulk: BulkConfig) -> Self {
        Self { classifier, bulk }
    }
}

/// A response before it is turned into a `tiny_http` response
#[derive(Debug, PartialEq, Eq)]
struct Reply {
    status: u16,
    body: Option<String>,
}

impl Reply {
    const fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn json<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(json) => Self {
                status,
                body: Some(json),
            },
            Err(e) => {
                warn!("failed to serialize response: {e}");
                Self::error(&ApiError::internal("Failed to serialize response"))
            },
        }
    }

    fn error(error: &ApiError) -> Self {
        let body = serde_json::to_string(&error.body())
            .unwrap_or_else(|_| r#"{"error":"Internal error"}"#.to_string());
        Self {
            status: error.status_code(),
            body: Some(body),
        }
    }
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Bind `host:port` and serve until the process is stopped
pub fn serve(host: &str, port: u16, state: &ServerState) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let server =
        Server::http(&addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    info!("Server running at http://{addr}/");

    for mut request in server.incoming_requests() {
        debug!("{} {}", request.method(), request.url());
        let reply = handle_request(&mut request, state);
        if let Err(e) = request.respond(into_response(reply)) {
            warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

fn handle_request(request: &mut Request, state: &ServerState) -> Reply {
    let method = request.method().clone();
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or_default();

    let body = if method == Method::Post {
        match read_body(request) {
            Ok(body) => body,
            Err(e) => return Reply::error(&e),
        }
    } else {
        String::new()
    };

    dispatch(&method, path, &body, state)
}

// =============================================================================
// ROUTING
// =============================================================================

/// Map a method and path to a handler
fn dispatch(method: &Method, path: &str, body: &str, state: &ServerState) -> Reply {
    if *method == Method::Options {
        return Reply::empty(200);
    }

    match (method, path) {
        (&Method::Post, "/api/test") => match parse_json::<TestRequest>(body) {
            Ok(req) => handle_result(api::test_text(&state.classifier, &req)),
            Err(e) => Reply::error(&e),
        },

        (&Method::Post, "/api/test-bulk") => match parse_json::<BulkRequest>(body) {
            Ok(req) => handle_result(api::test_bulk(&state.classifier, &req, &state.bulk)),
            Err(e) => Reply::error(&e),
        },

        (_, "/api/test" | "/api/test-bulk") => {
            Reply::error(&ApiError::method_not_allowed("Method not allowed"))
        },

        _ => Reply::error(&ApiError::not_found(format!("Not found: {method} {path}"))),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    read_limited(request.as_reader(), MAX_BODY_BYTES)
}

/// Read at most `limit` bytes of UTF-8
///
/// A longer body is rejected outright rather than cut short. A body that
/// cannot be read or is not UTF-8 is reported the same way as bad JSON.
fn read_limited(reader: impl Read, limit: u64) -> Result<String, ApiError> {
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes).map_err(|e| {
        debug!("failed to read request body: {e}");
        ApiError::bad_request("Invalid JSON")
    })?;

    if !u64::try_from(bytes.len()).is_ok_and(|len| len <= limit) {
        return Err(ApiError::bad_request(format!("Request body too large (limit {limit} bytes)")));
    }

    String::from_utf8(bytes).map_err(|e| {
        debug!("request body is not UTF-8: {e}");
        ApiError::bad_request("Invalid JSON")
    })
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        debug!("rejecting body: {e}");
        ApiError::bad_request("Invalid JSON")
    })
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => Reply::json(200, &data),
        Err(e) => Reply::error(&e),
    }
}

fn into_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let is_json = reply.body.is_some();
    let mut response = Response::from_data(reply.body.unwrap_or_default().into_bytes())
        .with_status_code(StatusCode(reply.status));

    let mut headers: Vec<(&str, &str)> = CORS_HEADERS.to_vec();
    if is_json {
        headers.push(("Content-Type", "application/json"));
        headers.push(("Cache-Control", "no-cache"));
    }

    for (name, value) in headers {
        match Header::from_bytes(name, value) {
            Ok(header) => response.add_header(header),
            Err(()) => warn!("invalid header {name}: {value}"),
        }
    }

    response
}
