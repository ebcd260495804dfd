//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```rust,ignore
/// use todo_list_core::async_effect;
///
/// async_effect! {
///     match source.fetch_todos().await {
///         Ok(items) => Some(TodoListAction::TodosLoaded { generation, items }),
///         Err(error) => Some(TodoListAction::TodosLoadFailed { generation, error: error.to_string() }),
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
