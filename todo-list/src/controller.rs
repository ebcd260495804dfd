//! The todo list controller.
//!
//! Bridges user intents, the todo store and the one-shot remote load. It is
//! the only producer of [`TodoAction`]s: every intent that changes the list is
//! turned into a store action and applied through [`TodoStoreReducer`].
//!
//! Rows are addressed by display index at the surface. The index is resolved
//! to a [`TodoId`] when the intent arrives, so an edit session stays attached
//! to its item even when other rows are deleted. A stale index is absorbed as
//! a no-op and logged at debug level.
//!
//! The initial load runs at most once. Its result is tagged with the
//! controller generation; [`TodoListAction::Teardown`] bumps the generation so
//! a result arriving after teardown is dropped.

use crate::collection::{TodoCollection, TodoId, TodoItem};
use crate::config::TodoListConfig;
use crate::source::TodoSource;
use crate::store::{TodoAction, TodoStoreReducer};
use std::sync::Arc;
use todo_list_core::{SmallVec, async_effect, effect::Effect, reducer::Reducer, smallvec};

/// Active edit of one item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Item being edited
    pub id: TodoId,
    /// Candidate title
    pub title: String,
}

/// Progress of the initial remote load
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Not started
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Seed applied
    Loaded {
        /// Number of items kept
        count: usize,
    },
    /// Request failed; the list was left as it was
    Failed {
        /// Rendered error
        error: String,
    },
}

/// State of the todo list controller
#[derive(Clone, Debug, Default)]
pub struct TodoListState {
    /// The todo store
    pub todos: TodoCollection,
    /// Pending text of the "new todo" field
    pub draft: String,
    /// Active edit session, if any
    pub edit: Option<EditSession>,
    /// Initial load progress
    pub load: LoadStatus,
    /// Tag for in-flight load results
    pub generation: u64,
    /// Set once the controller has been torn down
    pub torn_down: bool,
}

/// One displayed row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoRow<'a> {
    /// Display position
    pub index: usize,
    /// Stable key
    pub id: TodoId,
    /// The item
    pub item: &'a TodoItem,
    /// Whether this row is being edited
    pub editing: bool,
}

impl TodoListState {
    /// Creates an empty controller state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = TodoRow<'_>> {
        let editing = self.edit.as_ref().map(|session| session.id);
        self.todos
            .iter()
            .enumerate()
            .map(move |(index, (id, item))| TodoRow {
                index,
                id,
                item,
                editing: editing == Some(id),
            })
    }

    /// Display index of the row being edited
    #[must_use]
    pub fn editing_index(&self) -> Option<usize> {
        self.edit
            .as_ref()
            .and_then(|session| self.todos.position(session.id))
    }
}

/// Intents and effect results handled by the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoListAction {
    // ========== Lifecycle ==========
    /// Start the one-shot remote load
    Initialize,

    /// The remote load succeeded
    TodosLoaded {
        /// Generation the request was issued under
        generation: u64,
        /// Full remote list
        items: Vec<TodoItem>,
    },

    /// The remote load failed
    TodosLoadFailed {
        /// Generation the request was issued under
        generation: u64,
        /// Rendered error
        error: String,
    },

    /// The controller is going away; late load results must be dropped
    Teardown,

    // ========== User intents ==========
    /// The "new todo" field changed
    UpdateDraft {
        /// Current field text
        text: String,
    },

    /// Add a todo from the given text
    SubmitNewTodo {
        /// Raw text, trimmed before use
        text: String,
    },

    /// Open an edit session on a row
    BeginEdit {
        /// Display index
        index: usize,
    },

    /// The edit field changed
    UpdateEditBuffer {
        /// Current field text
        text: String,
    },

    /// Write the edit session back to the store
    SaveEdit,

    /// Close the edit session without saving
    CancelEdit,

    /// Delete a row
    RequestDelete {
        /// Display index
        index: usize,
    },
}

/// Environment dependencies for the controller
#[derive(Clone)]
pub struct TodoListEnvironment {
    /// Remote todo source
    pub source: Arc<dyn TodoSource>,
    /// Controller configuration
    pub config: TodoListConfig,
}

impl TodoListEnvironment {
    /// Creates a new `TodoListEnvironment`
    #[must_use]
    pub fn new(source: Arc<dyn TodoSource>, config: TodoListConfig) -> Self {
        Self { source, config }
    }
}

impl std::fmt::Debug for TodoListEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoListEnvironment")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Reducer for the todo list controller
#[derive(Clone, Debug, Default)]
pub struct TodoListReducer {
    store: TodoStoreReducer,
}

impl TodoListReducer {
    /// Creates a new `TodoListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: TodoStoreReducer::new(),
        }
    }

    /// Applies a store action to the collection
    fn apply(&self, state: &mut TodoListState, action: TodoAction) {
        let effects = self.store.reduce(&mut state.todos, action, &());
        debug_assert!(effects.is_empty(), "todo store reducer must stay pure");
    }

    /// Whether a load result belongs to the current, live request
    fn accepts_load_result(state: &TodoListState, generation: u64) -> bool {
        !state.torn_down && state.generation == generation && state.load == LoadStatus::Loading
    }

    fn start_load(
        state: &mut TodoListState,
        env: &TodoListEnvironment,
    ) -> SmallVec<[Effect<TodoListAction>; 4]> {
        if state.torn_down || state.load != LoadStatus::Idle {
            tracing::debug!(status = ?state.load, "initialize ignored: load already started");
            return SmallVec::new();
        }

        state.load = LoadStatus::Loading;
        let generation = state.generation;
        let source = Arc::clone(&env.source);
        tracing::info!(generation, endpoint = %env.config.endpoint, "loading initial todos");

        smallvec![async_effect! {
            match source.fetch_todos().await {
                Ok(items) => Some(TodoListAction::TodosLoaded { generation, items }),
                Err(error) => Some(TodoListAction::TodosLoadFailed {
                    generation,
                    error: error.to_string(),
                }),
            }
        }]
    }
}

impl Reducer for TodoListReducer {
    type State = TodoListState;
    type Action = TodoListAction;
    type Environment = TodoListEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per intent
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Lifecycle ==========
            TodoListAction::Initialize => return Self::start_load(state, env),

            TodoListAction::TodosLoaded { generation, items } => {
                if !Self::accepts_load_result(state, generation) {
                    tracing::debug!(generation, current = state.generation, "dropping stale todo load");
                    return SmallVec::new();
                }

                let received = items.len();
                let seed: Vec<TodoItem> = items.into_iter().take(env.config.seed_limit).collect();
                let count = seed.len();
                tracing::info!(received, kept = count, "initial todos loaded");

                // Fresh ids: any open session would point at a removed item.
                state.edit = None;
                self.apply(state, TodoAction::ReplaceAll { items: seed });
                state.load = LoadStatus::Loaded { count };
            },

            TodoListAction::TodosLoadFailed { generation, error } => {
                if !Self::accepts_load_result(state, generation) {
                    tracing::debug!(generation, current = state.generation, "dropping stale todo load failure");
                    return SmallVec::new();
                }

                tracing::error!(error = %error, "Error fetching todos");
                state.load = LoadStatus::Failed { error };
            },

            TodoListAction::Teardown => {
                state.torn_down = true;
                state.generation = state.generation.wrapping_add(1);
                tracing::debug!(generation = state.generation, "todo list torn down");
            },

            // ========== User intents ==========
            TodoListAction::UpdateDraft { text } => {
                state.draft = text;
            },

            TodoListAction::SubmitNewTodo { text } => {
                let title = text.trim();
                if title.is_empty() {
                    tracing::trace!("ignoring blank todo");
                    return SmallVec::new();
                }

                self.apply(
                    state,
                    TodoAction::Add {
                        item: TodoItem::new(title),
                    },
                );
                state.draft.clear();
            },

            TodoListAction::BeginEdit { index } => {
                let Some((id, title)) = state
                    .todos
                    .id_at(index)
                    .and_then(|id| state.todos.get(id).map(|item| (id, item.title.clone())))
                else {
                    tracing::debug!(index, "edit ignored: no row at index");
                    return SmallVec::new();
                };

                state.edit = Some(EditSession { id, title });
            },

            TodoListAction::UpdateEditBuffer { text } => match state.edit.as_mut() {
                Some(session) => session.title = text,
                None => tracing::trace!("edit buffer update ignored: no active session"),
            },

            TodoListAction::SaveEdit => {
                let Some(session) = state.edit.take() else {
                    tracing::trace!("save ignored: no active session");
                    return SmallVec::new();
                };

                // Keep the completion flag; only the title is editable.
                let Some(item) = state.todos.get(session.id).map(|item| item.retitled(session.title))
                else {
                    tracing::debug!(id = %session.id, "save ignored: item no longer exists");
                    return SmallVec::new();
                };

                self.apply(state, TodoAction::Edit { id: session.id, item });
            },

            TodoListAction::CancelEdit => {
                state.edit = None;
            },

            TodoListAction::RequestDelete { index } => {
                let Some(id) = state.todos.id_at(index) else {
                    tracing::debug!(index, "delete ignored: no row at index");
                    return SmallVec::new();
                };

                if state.edit.as_ref().is_some_and(|session| session.id == id) {
                    state.edit = None;
                }
                self.apply(state, TodoAction::Delete { id });
            },
        }

        SmallVec::new()
    }
}
