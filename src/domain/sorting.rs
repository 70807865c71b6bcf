use crate::domain::todo_list::TodoList;
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting todo lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Priority,
    Title,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortField::Priority),
            "title" => Ok(SortField::Title),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: priority, title",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts todo lists in-place by the given field and direction.
///
/// The sort is stable. Equal priorities fall back to the title so the
/// resulting order never depends on the input order.
///
/// # Examples
/// ```
/// use todo_lists::domain::sorting::{sort_lists, SortField, SortOrder};
/// use todo_lists::domain::todo_list::TodoList;
///
/// let mut lists = vec![TodoList::new("B", 2), TodoList::new("A", 1)];
///
/// sort_lists(&mut lists, SortField::Priority, SortOrder::Ascending);
/// assert_eq!(lists[0].title, "A");
/// ```
pub fn sort_lists(lists: &mut [TodoList], field: SortField, order: SortOrder) {
    lists.sort_by(|a, b| {
        let cmp = match field {
            SortField::Priority => compare_priority(a, b),
            SortField::Title => compare_title(a, b),
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// Numeric priority comparison with the title as tie-break
pub fn compare_priority(a: &TodoList, b: &TodoList) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.title.cmp(&b.title))
}

/// Case-insensitive title comparison
fn compare_title(a: &TodoList, b: &TodoList) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.priority.cmp(&b.priority))
}
