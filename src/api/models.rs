//! To-do API models.
//!
//! Contains the records served by the to-do API and small display helpers.

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Immutable once fetched; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// To-do ID
    pub id: i64,
    /// Short description of the task
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
    /// Owner of the task
    pub user_id: i64,
}

impl Todo {
    /// Create a new Todo instance.
    ///
    /// # Arguments
    /// * `id` - To-do ID
    /// * `title` - Task title
    /// * `completed` - Completion flag
    /// * `user_id` - Owning user ID
    ///
    /// # Returns
    /// * `Todo` - New to-do instance
    #[cfg(test)]
    pub fn new(id: i64, title: impl Into<String>, completed: bool, user_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            user_id,
        }
    }

    /// Human readable status used by the details modal.
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Done" } else { "Planned" }
    }
}

/// The user a to-do is assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User ID
    pub id: i64,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Login name, when the API provides one
    #[serde(default)]
    pub username: Option<String>,
    /// Phone number, when the API provides one
    #[serde(default)]
    pub phone: Option<String>,
    /// Personal website, when the API provides one
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_deserializes_camel_case_user_id() {
        let json = r#"{"id": 7, "title": "buy milk", "completed": true, "userId": 3}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo, Todo::new(7, "buy milk", true, 3));
    }

    #[test]
    fn test_todo_ids_beyond_32_bits_and_negative() {
        let json = r#"[
            {"id": 5000000000, "title": "big", "completed": false, "userId": -1}
        ]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos[0].id, 5_000_000_000);
        assert_eq!(todos[0].user_id, -1);
    }

    #[test]
    fn test_todo_status_label() {
        assert_eq!(Todo::new(1, "a", false, 1).status_label(), "Planned");
        assert_eq!(Todo::new(1, "a", true, 1).status_label(), "Done");
    }

    #[test]
    fn test_user_ignores_unknown_and_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": {"city": "Gwenborough"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.phone.as_deref(), Some("1-770-736-8031 x56442"));
        assert!(user.username.is_none());
        assert!(user.website.is_none());
    }
}
