use crate::domain::sorting::{sort_lists, SortField, SortOrder};
use crate::domain::todo_list::TodoList;
use crate::presentation::route::Route;
use std::fmt;

/// One rendered entry of the sorted overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// The list's priority, shown as its ordinal
    pub ordinal: u32,
    /// Uppercased title
    pub label: String,
    /// Where clicking the row navigates to
    pub target: Route,
}

impl fmt::Display for ListRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.ordinal, self.label)
    }
}

/// Projects lists into display order (ascending priority).
///
/// Pure and stateless: safe to recompute on every render.
pub fn render(lists: &[TodoList]) -> Vec<ListRow> {
    render_by(lists, SortField::Priority, SortOrder::Ascending)
}

/// Like [`render`], with an explicit sort key and direction
pub fn render_by(lists: &[TodoList], field: SortField, order: SortOrder) -> Vec<ListRow> {
    let mut sorted = lists.to_vec();
    sort_lists(&mut sorted, field, order);

    sorted
        .iter()
        .map(|list| ListRow {
            ordinal: list.priority,
            label: list.display_title(),
            target: Route::List(list.title.clone()),
        })
        .collect()
}

/// Renders the overview as one line per row
pub fn render_text(lists: &[TodoList]) -> String {
    render(lists)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
