//! Background fetches.
//!
//! Runs the to-do list and user requests on the tokio runtime so the UI
//! loop never waits on the network, then hands results back to `App`.

use crate::api::{Todo, TodoClient, User};
use crate::app::{App, UserRequest};
use crate::error::ClientError;
use tokio::task::{JoinError, JoinHandle};

/// In-flight requests.
#[derive(Debug)]
pub struct Tasks {
    client: TodoClient,
    todos: Option<JoinHandle<Result<Vec<Todo>, ClientError>>>,
    user: Option<(UserRequest, JoinHandle<Result<User, ClientError>>)>,
}

impl Tasks {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: None,
            user: None,
        }
    }

    /// Start fetching the to-do list unless a fetch is already running.
    pub fn spawn_todos(&mut self, app: &mut App) {
        if self.todos.is_some() {
            return;
        }
        app.begin_todos_load();
        tracing::info!(base_url = self.client.base_url(), "loading todos");

        let client = self.client.clone();
        self.todos = Some(tokio::spawn(async move { client.get_todos().await }));
    }

    /// Start fetching the owner of a selected to-do.
    ///
    /// # Details
    /// A still running fetch for an earlier selection is aborted.
    pub fn spawn_user(&mut self, request: UserRequest) {
        if let Some((previous, handle)) = self.user.take() {
            tracing::debug!(todo_id = previous.todo_id, "aborting stale user fetch");
            handle.abort();
        }
        tracing::info!(todo_id = request.todo_id, user_id = request.user_id, "loading user");

        let client = self.client.clone();
        let handle = tokio::spawn(async move { client.get_user(request.user_id).await });
        self.user = Some((request, handle));
    }

    /// Collect finished requests without blocking.
    pub async fn poll(&mut self, app: &mut App) {
        if let Some(handle) = self.todos.take_if(|h| h.is_finished()) {
            apply_todos(app, handle.await);
        }

        if let Some((request, handle)) = self.user.take_if(|(_, h)| h.is_finished()) {
            apply_user(app, request, handle.await);
        }
    }
}

fn apply_todos(app: &mut App, result: Result<Result<Vec<Todo>, ClientError>, JoinError>) {
    match result {
        Ok(Ok(todos)) => {
            tracing::info!(count = todos.len(), "todos loaded");
            app.set_todos(todos);
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "failed to load todos");
            app.fail_todos_load(e.to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "todo fetch task failed");
            app.fail_todos_load(e.to_string());
        }
    }
}

fn apply_user(
    app: &mut App,
    request: UserRequest,
    result: Result<Result<User, ClientError>, JoinError>,
) {
    let applied = match result {
        Ok(Ok(user)) => {
            tracing::info!(user_id = user.id, "user loaded");
            app.set_user(request.todo_id, user)
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, user_id = request.user_id, "failed to load user");
            app.fail_user_load(request.todo_id, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "user fetch task failed");
            app.fail_user_load(request.todo_id, e.to_string())
        }
    };

    if !applied {
        tracing::debug!(todo_id = request.todo_id, "discarded user for closed selection");
    }
}
