//! In-memory todo list with a one-shot remote seed load.
//!
//! The crate is split the same way the behaviour is:
//!
//! - [`store`]: pure reducer over the [`TodoCollection`] (add, edit, delete,
//!   replace all)
//! - [`controller`]: turns user intents into store actions, owns the edit
//!   session and runs the initial load as an effect
//! - [`source`]: where the initial list comes from (HTTP or in memory)
//! - [`console`]: a plain-text surface over the controller
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_list::{
//!     HttpTodoSource, TodoListAction, TodoListConfig, TodoListEnvironment, TodoListReducer,
//!     TodoListState,
//! };
//! use todo_list_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TodoListConfig::default();
//! let env = TodoListEnvironment::new(Arc::new(HttpTodoSource::from_config(&config)), config);
//! let store = Store::new(TodoListState::new(), TodoListReducer::new(), env);
//!
//! // Load the first five remote todos
//! let mut handle = store.send(TodoListAction::Initialize).await?;
//! handle.wait().await;
//!
//! store
//!     .send(TodoListAction::SubmitNewTodo { text: "  Buy milk  ".to_string() })
//!     .await?;
//!
//! let count = store.state(|s| s.todos.len()).await;
//! println!("{count} todos");
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod config;
pub mod console;
pub mod controller;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use collection::{TodoCollection, TodoId, TodoItem};
pub use config::TodoListConfig;
pub use controller::{
    EditSession, LoadStatus, TodoListAction, TodoListEnvironment, TodoListReducer, TodoListState,
};
pub use source::{HttpTodoSource, SourceError, TodoSource};
pub use store::{TodoAction, TodoStoreReducer};
