//! Domain types for the todo collection.
//!
//! Items carry a stable [`TodoId`] assigned at insertion. Ids grow
//! monotonically, so ordering the map by id is the same as insertion order,
//! and an item keeps its position when it is edited.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable key of a todo item within one [`TodoCollection`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo item
///
/// Deserializes from the remote shape `{ id, title, completed, ... }`; only
/// `title` and `completed` are kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Title/description of the todo
    pub title: String,
    /// Whether the todo is completed
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    /// Returns a copy with a different title and the same completion flag
    #[must_use]
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: self.completed,
        }
    }
}

/// Ordered collection of todo items
///
/// Mutation is crate-private: outside code changes a collection only by
/// sending actions through the store reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoCollection {
    items: BTreeMap<TodoId, TodoItem>,
    next_id: u64,
}

impl TodoCollection {
    /// Creates an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items with their ids, in display order
    pub fn iter(&self) -> impl Iterator<Item = (TodoId, &TodoItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// Cloned items in display order
    #[must_use]
    pub fn items(&self) -> Vec<TodoItem> {
        self.items.values().cloned().collect()
    }

    /// Looks up an item by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.get(&id)
    }

    /// Id of the item currently displayed at `index`
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<TodoId> {
        self.items.keys().nth(index).copied()
    }

    /// Display position of `id`
    #[must_use]
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.keys().position(|key| *key == id)
    }

    pub(crate) fn push(&mut self, item: TodoItem) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    pub(crate) fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        self.items.remove(&id)
    }

    pub(crate) fn replace(&mut self, id: TodoId, item: TodoItem) -> Option<TodoItem> {
        self.items.get_mut(&id).map(|slot| std::mem::replace(slot, item))
    }

    /// Drops every item; ids keep growing so stale ids never match again.
    pub(crate) fn replace_all(&mut self, items: Vec<TodoItem>) {
        self.items.clear();
        for item in items {
            self.push(item);
        }
    }
}

impl FromIterator<TodoItem> for TodoCollection {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            collection.push(item);
        }
        collection
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    fn collection(titles: &[&str]) -> TodoCollection {
        titles.iter().copied().map(TodoItem::new).collect()
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let todos = collection(&["a", "b", "c"]);

        let titles: Vec<_> = todos.iter().map(|(_, item)| item.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(todos.position(todos.id_at(2).unwrap()), Some(2));
        assert_eq!(todos.id_at(3), None);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut todos = collection(&["a", "b", "c"]);
        let id = todos.id_at(1).unwrap();

        let old = todos.replace(id, TodoItem::new("B"));

        assert_eq!(old, Some(TodoItem::new("b")));
        assert_eq!(todos.position(id), Some(1));
        assert_eq!(todos.get(id).unwrap().title, "B");
    }

    #[test]
    fn test_ids_are_not_reused_after_replace_all() {
        let mut todos = collection(&["a", "b"]);
        let stale = todos.id_at(0).unwrap();

        todos.replace_all(vec![TodoItem::new("x"), TodoItem::new("y")]);

        assert_eq!(todos.get(stale), None);
        assert_eq!(todos.items(), vec![TodoItem::new("x"), TodoItem::new("y")]);
    }

    #[test]
    fn test_remote_shape_deserializes() {
        let json = r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false},
                       {"userId":1,"id":4,"title":"et porro tempora","completed":true}]"#;

        let items: Vec<TodoItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "delectus aut autem");
        assert!(items[1].completed);
    }

    #[test]
    fn test_retitled_keeps_completion() {
        let done = TodoItem {
            title: "old".to_string(),
            completed: true,
        };

        assert_eq!(
            done.retitled("new"),
            TodoItem {
                title: "new".to_string(),
                completed: true
            }
        );
    }
}
