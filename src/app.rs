//! Application state management.
//!
//! Manages the to-do list, cursor, selection, filters, loading flags and UI mode.

use crate::api::{Todo, User};
use crate::filter::{StatusFilter, filter_todos};
use chrono::{DateTime, Local};
use std::cmp;

/// UI input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal list view
    List,
    /// Editing the search query
    Search,
}

/// User fetch requested by a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRequest {
    /// To-do the user belongs to
    pub todo_id: i64,
    /// User to fetch
    pub user_id: i64,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// All to-dos fetched from the API
    pub todos: Vec<Todo>,
    /// To-dos matching the current filter and query
    pub visible_todos: Vec<Todo>,
    /// Highlighted row (index in visible_todos)
    pub cursor: usize,
    /// To-do shown in the modal
    pub selected_todo: Option<Todo>,
    /// Owner of the selected to-do, once loaded
    pub selected_user: Option<User>,
    /// Completion status filter
    pub filter: StatusFilter,
    /// Title search query
    pub query: String,
    /// Whether the to-do list is being fetched
    pub is_loading_todos: bool,
    /// Whether the selected user is being fetched
    pub is_loading_user: bool,
    /// Whether the details modal is shown
    pub is_modal_open: bool,
    /// Current UI mode
    pub mode: UiMode,
    /// Status message to display
    pub status_message: Option<String>,
    /// When the to-do list was last loaded
    pub loaded_at: Option<DateTime<Local>>,
    /// Frame counter driving the loading spinner
    pub tick: usize,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `filter` - Initial status filter
    pub fn new(filter: StatusFilter) -> Self {
        Self {
            todos: Vec::new(),
            visible_todos: Vec::new(),
            cursor: 0,
            selected_todo: None,
            selected_user: None,
            filter,
            query: String::new(),
            is_loading_todos: false,
            is_loading_user: false,
            is_modal_open: false,
            mode: UiMode::List,
            status_message: None,
            loaded_at: None,
            tick: 0,
        }
    }

    /// Mark the to-do list as loading.
    pub fn begin_todos_load(&mut self) {
        self.is_loading_todos = true;
        self.set_status("Loading todos...".to_string());
    }

    /// Store freshly fetched to-dos and apply current filters.
    pub fn set_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        self.is_loading_todos = false;
        self.loaded_at = Some(Local::now());
        self.apply_filters();
        self.set_status(format!("Loaded {} todos", self.todos.len()));
    }

    /// Record a failed to-do list fetch.
    pub fn fail_todos_load(&mut self, message: String) {
        self.is_loading_todos = false;
        self.set_status(format!("Failed to load todos: {}", message));
    }

    /// Recompute the visible list from the current filter and query.
    ///
    /// # Details
    /// Keeps the cursor inside the new list.
    pub fn apply_filters(&mut self) {
        self.visible_todos = filter_todos(&self.todos, self.filter, &self.query);

        // Ensure cursor is valid
        self.cursor = cmp::min(self.cursor, self.visible_todos.len().saturating_sub(1));
    }

    /// Set the status filter.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.apply_filters();
        tracing::debug!(filter = %self.filter, visible = self.visible_todos.len(), "filter changed");
    }

    /// Cycle the status filter forward or backward.
    pub fn cycle_filter(&mut self, forward: bool) {
        let filter = if forward {
            self.filter.next()
        } else {
            self.filter.prev()
        };
        self.set_filter(filter);
    }

    /// Add a character to the search query.
    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        self.apply_filters();
    }

    /// Remove last character from the search query.
    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.apply_filters();
    }

    /// Clear the search query.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.apply_filters();
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.visible_todos.is_empty() {
            return;
        }
        if self.cursor == 0 {
            // Wrap to bottom
            self.cursor = self.visible_todos.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.visible_todos.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible_todos.len();
    }

    /// Put the cursor on a row; out of range indexes are ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.visible_todos.len() {
            self.cursor = index;
        }
    }

    /// To-do under the cursor.
    pub fn current_todo(&self) -> Option<&Todo> {
        self.visible_todos.get(self.cursor)
    }

    /// Select a to-do and open the details modal.
    ///
    /// # Returns
    /// * `UserRequest` - The user fetch the caller should issue
    ///
    /// # Details
    /// Any previously loaded user is dropped so the modal never shows
    /// another to-do's owner.
    pub fn select_todo(&mut self, todo: Todo) -> UserRequest {
        let request = UserRequest {
            todo_id: todo.id,
            user_id: todo.user_id,
        };
        self.selected_todo = Some(todo);
        // Drop the previous owner until the new one arrives
        self.selected_user = None;
        self.is_loading_user = true;
        self.is_modal_open = true;
        request
    }

    /// Select the to-do under the cursor.
    ///
    /// # Details
    /// Nothing is selectable while the list is reloading, since the table
    /// only shows the loader then.
    pub fn select_current(&mut self) -> Option<UserRequest> {
        if self.is_loading_todos {
            return None;
        }
        let todo = self.current_todo()?.clone();
        Some(self.select_todo(todo))
    }

    /// Whether a user response for `todo_id` still matches the selection.
    fn is_current_selection(&self, todo_id: i64) -> bool {
        self.selected_todo.as_ref().is_some_and(|t| t.id == todo_id)
    }

    /// Apply a fetched user.
    ///
    /// # Returns
    /// * `bool` - False when the response was stale and discarded
    pub fn set_user(&mut self, todo_id: i64, user: User) -> bool {
        // Ignore responses for a to-do that is no longer open
        if !self.is_current_selection(todo_id) {
            return false;
        }
        self.selected_user = Some(user);
        self.is_loading_user = false;
        true
    }

    /// Record a failed user fetch.
    ///
    /// # Returns
    /// * `bool` - False when the failure belongs to a previous selection
    pub fn fail_user_load(&mut self, todo_id: i64, message: String) -> bool {
        if !self.is_current_selection(todo_id) {
            return false;
        }
        self.is_loading_user = false;
        self.set_status(format!("Failed to load user: {}", message));
        true
    }

    /// Close the modal and clear the selection.
    pub fn close_modal(&mut self) {
        self.selected_user = None;
        self.selected_todo = None;
        self.is_loading_user = false;
        self.is_modal_open = false;
    }

    /// Advance the spinner frame.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            username: None,
            phone: None,
            website: None,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(StatusFilter::All);
        app.begin_todos_load();
        app.set_todos(vec![
            Todo::new(1, "Rust tutorial", false, 10),
            Todo::new(2, "Python guide", true, 20),
            Todo::new(3, "rusty nails", true, 10),
        ]);
        app
    }

    #[test]
    fn test_app_new() {
        let app = App::new(StatusFilter::Active);
        assert!(app.todos.is_empty());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, UiMode::List);
        assert_eq!(app.filter, StatusFilter::Active);
        assert!(!app.is_modal_open);
    }

    #[test]
    fn test_set_todos_clears_loading_and_filters() {
        let app = loaded_app();
        assert!(!app.is_loading_todos);
        assert!(app.loaded_at.is_some());
        assert_eq!(app.visible_todos.len(), 3);
    }

    #[test]
    fn test_fail_todos_load() {
        let mut app = App::new(StatusFilter::All);
        app.begin_todos_load();
        app.fail_todos_load("timeout".to_string());
        assert!(!app.is_loading_todos);
        assert!(app.status_message.as_deref().unwrap().contains("timeout"));
    }

    #[test]
    fn test_query_and_filter_combine() {
        let mut app = loaded_app();
        app.push_query_char('r');
        app.push_query_char('U');
        assert_eq!(app.visible_todos.len(), 2);

        app.set_filter(StatusFilter::Completed);
        assert_eq!(app.visible_todos.len(), 1);
        assert_eq!(app.visible_todos[0].id, 3);

        app.pop_query_char();
        app.clear_query();
        assert_eq!(app.visible_todos.len(), 2);
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let mut app = loaded_app();
        app.set_cursor(2);
        app.set_filter(StatusFilter::Active);
        assert_eq!(app.cursor, 0);

        app.query = "nothing matches".to_string();
        app.apply_filters();
        assert_eq!(app.cursor, 0);
        assert!(app.current_todo().is_none());
        assert!(app.select_current().is_none());
    }

    #[test]
    fn test_select_current_blocked_while_reloading() {
        let mut app = loaded_app();
        app.begin_todos_load();
        assert!(app.select_current().is_none());
        assert!(!app.is_modal_open);
        assert!(app.selected_todo.is_none());
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut app = loaded_app();
        app.move_down();
        assert_eq!(app.cursor, 1);
        app.move_up();
        assert_eq!(app.cursor, 0);
        app.move_up();
        assert_eq!(app.cursor, 2);
        app.move_down();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_set_cursor_ignores_out_of_range() {
        let mut app = loaded_app();
        app.set_cursor(7);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_cycle_filter() {
        let mut app = loaded_app();
        app.cycle_filter(true);
        assert_eq!(app.filter, StatusFilter::Active);
        app.cycle_filter(false);
        app.cycle_filter(false);
        assert_eq!(app.filter, StatusFilter::Completed);
    }

    #[test]
    fn test_select_current_opens_modal_and_requests_user() {
        let mut app = loaded_app();
        app.move_down();
        let request = app.select_current().unwrap();
        assert_eq!(request, UserRequest { todo_id: 2, user_id: 20 });
        assert!(app.is_modal_open);
        assert!(app.is_loading_user);
        assert_eq!(app.selected_todo.as_ref().unwrap().id, 2);

        assert!(app.set_user(2, user(20)));
        assert!(!app.is_loading_user);
        assert_eq!(app.selected_user.as_ref().unwrap().id, 20);
    }

    #[test]
    fn test_stale_user_is_discarded() {
        let mut app = loaded_app();
        app.select_current();
        app.close_modal();
        app.move_down();
        app.select_current();

        assert!(!app.set_user(1, user(10)));
        assert!(app.selected_user.is_none());
        assert!(app.is_loading_user);

        assert!(!app.fail_user_load(1, "boom".to_string()));
        assert!(app.is_loading_user);
    }

    #[test]
    fn test_reselect_drops_previous_user() {
        let mut app = loaded_app();
        let first = app.select_current().unwrap();
        app.set_user(first.todo_id, user(first.user_id));
        app.move_down();
        app.select_current();
        assert!(app.selected_user.is_none());
    }

    #[test]
    fn test_close_modal_clears_selection() {
        let mut app = loaded_app();
        let request = app.select_current().unwrap();
        app.set_user(request.todo_id, user(request.user_id));
        app.close_modal();
        assert!(!app.is_modal_open);
        assert!(app.selected_todo.is_none());
        assert!(app.selected_user.is_none());
        assert!(!app.set_user(request.todo_id, user(request.user_id)));
    }

    #[test]
    fn test_fail_user_load_for_current_selection() {
        let mut app = loaded_app();
        let request = app.select_current().unwrap();
        assert!(app.fail_user_load(request.todo_id, "404".to_string()));
        assert!(!app.is_loading_user);
        assert!(app.is_modal_open);
    }
}
