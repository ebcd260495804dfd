//! In-memory implementations of [`TodoSource`].

use super::{FetchFuture, SourceError, TodoSource};
use crate::collection::TodoItem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Always returns the same list and counts how often it was asked
#[derive(Debug, Default)]
pub struct StaticTodoSource {
    items: Vec<TodoItem>,
    calls: AtomicUsize,
}

impl StaticTodoSource {
    /// Create a source returning `items`
    #[must_use]
    pub const fn new(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a source returning one item per title
    #[must_use]
    pub fn from_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(titles.into_iter().map(TodoItem::new).collect())
    }

    /// Number of completed `fetch_todos` calls
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TodoSource for StaticTodoSource {
    fn fetch_todos(&self) -> FetchFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let items = self.items.clone();
        Box::pin(async move { Ok(items) })
    }
}

/// Always fails with the same error
#[derive(Debug, Clone)]
pub struct FailingTodoSource {
    error: SourceError,
}

impl FailingTodoSource {
    /// Create a source failing with `error`
    #[must_use]
    pub const fn new(error: SourceError) -> Self {
        Self { error }
    }
}

impl TodoSource for FailingTodoSource {
    fn fetch_todos(&self) -> FetchFuture<'_> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

/// Wraps another source and answers only after `delay`
#[derive(Debug)]
pub struct DelayedTodoSource<S> {
    inner: S,
    delay: Duration,
}

impl<S: TodoSource> DelayedTodoSource<S> {
    /// Delay every answer of `inner` by `delay`
    #[must_use]
    pub const fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<S: TodoSource> TodoSource for DelayedTodoSource<S> {
    fn fetch_todos(&self) -> FetchFuture<'_> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            self.inner.fetch_todos().await
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_counts_calls() {
        let source = StaticTodoSource::from_titles(["a", "b"]);

        let items = source.fetch_todos().await.unwrap();

        assert_eq!(items, vec![TodoItem::new("a"), TodoItem::new("b")]);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = FailingTodoSource::new(SourceError::RequestFailed("offline".into()));

        let error = source.fetch_todos().await.unwrap_err();

        assert_eq!(error.to_string(), "Request failed: offline");
    }

    #[tokio::test]
    async fn test_delayed_source_waits() {
        let source = DelayedTodoSource::new(
            StaticTodoSource::from_titles(["late"]),
            Duration::from_millis(10),
        );

        let items = source.fetch_todos().await.unwrap();

        assert_eq!(items, vec![TodoItem::new("late")]);
    }
}
