//! Console front end for the todo list.
//!
//! Loads the seed list, then reads one command per line from stdin.
//! Logging goes to stderr and honours `RUST_LOG`.

use std::sync::Arc;
use std::time::Duration;
use todo_list::console::{self, Command, HELP};
use todo_list::{
    HttpTodoSource, TodoListAction, TodoListConfig, TodoListEnvironment, TodoListReducer,
    TodoListState,
};
use todo_list_runtime::{Store, StoreError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type TodoStore = Store<TodoListState, TodoListAction, TodoListEnvironment, TodoListReducer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_list=info,todo_list_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TodoListConfig::default();
    let source = Arc::new(HttpTodoSource::from_config(&config));
    tracing::info!(endpoint = source.endpoint(), "loading seed todos");
    let env = TodoListEnvironment::new(source, config);
    let store = Store::new(TodoListState::new(), TodoListReducer::new(), env);

    println!("=== Todo List ===");
    let mut handle = store.send(TodoListAction::Initialize).await?;
    if let Err(StoreError::Timeout) = handle.wait_with_timeout(Duration::from_secs(5)).await {
        println!("still loading; type `list` to refresh");
    }
    print!("{}", store.state(console::render).await);
    println!("type `help` for commands");

    let input = run_console(&store).await;

    store.send(TodoListAction::Teardown).await?;
    if let Err(error) = store.shutdown(Duration::from_millis(100)).await {
        tracing::warn!(%error, "shutdown did not finish cleanly");
    }

    input.map_err(Into::into)
}

/// Read commands from stdin until `quit` or end of input
async fn run_console(store: &TodoStore) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{HELP}");
                continue;
            },
            Ok(Command::List) => {},
            Ok(Command::Intent(action)) => {
                if let Err(error) = store.send(action).await {
                    tracing::warn!(%error, "intent rejected");
                    break;
                }
            },
            Err(error) => {
                println!("{error}");
                continue;
            },
        }
        print!("{}", store.state(console::render).await);
    }
    Ok(())
}
