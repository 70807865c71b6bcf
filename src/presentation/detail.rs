use crate::domain::store::ListStore;
use crate::domain::todo_list::TodoItem;
use crate::error::Result;
use std::fmt;

/// Expanded, read-only view of one list's items.
///
/// Items are copied from the store when the view is mounted and are not
/// refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    title: String,
    items: Vec<TodoItem>,
}

impl DetailView {
    /// Mounts the view for the list with the given title
    pub fn mount(store: &ListStore, title: &str) -> Result<Self> {
        let list = store.find_by_title(title)?;
        tracing::debug!(
            title,
            items = list.items.len(),
            completed = list.completed_count(),
            "mounted detail view"
        );

        Ok(Self {
            title: list.title.clone(),
            items: list.items.clone(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for (idx, item) in self.items.iter().enumerate() {
            let mark = if item.checked { 'x' } else { ' ' };
            write!(f, "\n{}. [{}] {}", idx + 1, mark, item.title)?;
        }
        Ok(())
    }
}
