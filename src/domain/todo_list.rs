use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};

/// A single checkable task inside a todo list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub title: String,
    pub checked: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            checked: false,
        }
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A named, prioritized container of todo items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub title: String,
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list with the given title and priority
    pub fn new(title: impl Into<String>, priority: u32) -> Self {
        Self {
            title: title.into(),
            priority,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<TodoItem>) -> Self {
        self.items = items;
        self
    }

    /// Title as shown in the overview
    pub fn display_title(&self) -> String {
        self.title.to_uppercase()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }
}

/// Payload of an "add list" request.
///
/// The priority is provisional: the store overwrites it when it renumbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewList {
    pub title: String,
    #[serde(default)]
    pub priority: u32,
}

impl NewList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: 0,
        }
    }
}

impl From<NewList> for TodoList {
    fn from(new_list: NewList) -> Self {
        TodoList::new(new_list.title, new_list.priority)
    }
}

/// Rejects titles that are empty or only whitespace
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(())
}
