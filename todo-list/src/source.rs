//! Remote todo source.
//!
//! The controller fetches its seed list through the [`TodoSource`] trait.
//! [`HttpTodoSource`] talks to the real endpoint; the in-memory sources are
//! used by tests and for offline runs.

use crate::collection::TodoItem;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

mod http;
mod memory;

pub use http::HttpTodoSource;
pub use memory::{DelayedTodoSource, FailingTodoSource, StaticTodoSource};

/// Future returned by [`TodoSource::fetch_todos`]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<TodoItem>, SourceError>> + Send + 'a>>;

/// Errors that can occur while fetching the remote list
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body was not a JSON array of todos
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),
}

/// Source of the initial todo list
///
/// Implementations must be `Send + Sync` so the controller can move them into
/// an effect.
///
/// # Dyn Compatibility
///
/// Returns an explicit boxed future instead of using `async fn` so the source
/// can live behind `Arc<dyn TodoSource>` in the environment.
pub trait TodoSource: Send + Sync {
    /// Fetch the full remote list, in remote order
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] on transport or decode failure.
    fn fetch_todos(&self) -> FetchFuture<'_>;
}
