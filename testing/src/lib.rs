//! # Todo List Testing
//!
//! Testing utilities and helpers for the todo list.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for effects
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use todo_list_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoStoreReducer::new())
//!     .with_env(())
//!     .given_state(TodoCollection::new())
//!     .when_action(TodoAction::Add { item: TodoItem::new("Buy milk") })
//!     .then_state(|todos| assert_eq!(todos.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs the subscriber.
    /// The filter honours `RUST_LOG` and defaults to `debug`.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use reducer_test::{ReducerTest, assertions};
