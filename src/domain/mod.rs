pub mod sorting;
pub mod store;
pub mod todo_list;

pub use sorting::{sort_lists, SortField, SortOrder};
pub use store::{ListStore, SubscriptionId};
pub use todo_list::{NewList, TodoItem, TodoList};
