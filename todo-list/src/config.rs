//! Configuration for the todo list controller.

/// Remote list the initial seed is fetched from
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Number of remote items kept by the initial load
pub const DEFAULT_SEED_LIMIT: usize = 5;

/// Todo list configuration
///
/// # Example
///
/// ```
/// use todo_list::TodoListConfig;
///
/// let config = TodoListConfig::default().with_endpoint("http://localhost:8080/todos");
/// assert_eq!(config.seed_limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListConfig {
    /// URL of the remote todo list (HTTP GET, JSON array)
    pub endpoint: String,
    /// How many remote items the initial load keeps
    pub seed_limit: usize,
}

impl TodoListConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(endpoint: impl Into<String>, seed_limit: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            seed_limit,
        }
    }

    /// Set the remote endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set how many remote items are kept
    #[must_use]
    pub const fn with_seed_limit(mut self, seed_limit: usize) -> Self {
        self.seed_limit = seed_limit;
        self
    }
}

impl Default for TodoListConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_SEED_LIMIT)
    }
}
