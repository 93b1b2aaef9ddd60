//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure handlers
//! that any HTTP server implementation (`tiny_http`, axum, etc.) or a direct
//! client can call.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation
//! - **Wire shapes are stable**: results serialize as `isNonsense`/`flaggedBy`

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorBody, ErrorCode};
pub use handlers::{test_bulk, test_text};
pub use types::{BulkRequest, BulkResponse, TestRequest};
