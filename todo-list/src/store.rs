//! The todo store reducer.
//!
//! A pure transition function over [`TodoCollection`]. It never produces
//! effects. Edit and delete address items by [`TodoId`]; an id that is not in
//! the collection leaves it unchanged.

use crate::collection::{TodoCollection, TodoId, TodoItem};
use todo_list_core::{SmallVec, effect::Effect, reducer::Reducer};

/// Actions accepted by the todo store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append an item at the end
    Add {
        /// Item to append
        item: TodoItem,
    },

    /// Remove an item
    Delete {
        /// Item to remove
        id: TodoId,
    },

    /// Replace the whole item stored under `id`, keeping its position
    Edit {
        /// Item to replace
        id: TodoId,
        /// New value
        item: TodoItem,
    },

    /// Replace the entire collection
    ReplaceAll {
        /// New contents, in order
        items: Vec<TodoItem>,
    },
}

/// Reducer for the todo collection
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoStoreReducer;

impl TodoStoreReducer {
    /// Creates a new `TodoStoreReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoStoreReducer {
    type State = TodoCollection;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { item } => {
                let id = state.push(item);
                tracing::trace!(%id, "todo added");
            },
            TodoAction::Delete { id } => {
                if state.remove(id).is_none() {
                    tracing::debug!(%id, "delete ignored: no such todo");
                }
            },
            TodoAction::Edit { id, item } => {
                if state.replace(id, item).is_none() {
                    tracing::debug!(%id, "edit ignored: no such todo");
                }
            },
            TodoAction::ReplaceAll { items } => {
                tracing::trace!(count = items.len(), "replacing all todos");
                state.replace_all(items);
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use todo_list_testing::{ReducerTest, assertions};

    fn seeded(titles: &[&str]) -> TodoCollection {
        titles.iter().copied().map(TodoItem::new).collect()
    }

    fn titles(todos: &TodoCollection) -> Vec<String> {
        todos.iter().map(|(_, item)| item.title.clone()).collect()
    }

    #[test]
    fn test_add_appends() {
        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(seeded(&["a"]))
            .when_action(TodoAction::Add {
                item: TodoItem::new("b"),
            })
            .then_state(|todos| {
                assert_eq!(titles(todos), ["a", "b"]);
                assert!(!todos.get(todos.id_at(1).unwrap()).unwrap().completed);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_is_not_idempotent() {
        let item = TodoItem::new("same");

        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(TodoCollection::new())
            .when_action(TodoAction::Add { item: item.clone() })
            .when_action(TodoAction::Add { item })
            .then_state(|todos| {
                assert_eq!(titles(todos), ["same", "same"]);
                assert_ne!(todos.id_at(0), todos.id_at(1));
            })
            .run();
    }

    #[test]
    fn test_delete_removes_and_keeps_order() {
        let todos = seeded(&["a", "b", "c"]);
        let id = todos.id_at(1).unwrap();

        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(todos)
            .when_action(TodoAction::Delete { id })
            .then_state(|todos| assert_eq!(titles(todos), ["a", "c"]))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_delete_unknown_id_is_identity() {
        let todos = seeded(&["a", "b"]);
        let stale = todos.id_at(0).unwrap();
        let mut after_delete = todos.clone();
        TodoStoreReducer.reduce(&mut after_delete, TodoAction::Delete { id: stale }, &());
        let expected = after_delete.clone();

        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(after_delete)
            .when_action(TodoAction::Delete { id: stale })
            .then_state(move |todos| assert_eq!(*todos, expected))
            .run();
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let todos = seeded(&["a", "b", "c"]);
        let id = todos.id_at(1).unwrap();
        let done = TodoItem {
            title: "B".to_string(),
            completed: true,
        };

        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(todos)
            .when_action(TodoAction::Edit {
                id,
                item: done.clone(),
            })
            .then_state(move |todos| {
                assert_eq!(titles(todos), ["a", "B", "c"]);
                assert_eq!(todos.get(id), Some(&done));
            })
            .run();
    }

    #[test]
    fn test_edit_unknown_id_is_identity() {
        let mut todos = seeded(&["a"]);
        let stale = todos.id_at(0).unwrap();
        todos.remove(stale);
        let expected = todos.clone();

        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(todos)
            .when_action(TodoAction::Edit {
                id: stale,
                item: TodoItem::new("ghost"),
            })
            .then_state(move |todos| assert_eq!(*todos, expected))
            .run();
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let items = vec![TodoItem::new("x"), TodoItem::new("y")];
        let expected = items.clone();

        ReducerTest::new(TodoStoreReducer::new())
            .with_env(())
            .given_state(seeded(&["a", "b", "c"]))
            .when_action(TodoAction::ReplaceAll { items })
            .then_state(move |todos| assert_eq!(todos.items(), expected))
            .then_effects(assertions::assert_no_effects)
            .run();
    }
}
