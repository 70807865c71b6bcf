//! # Todo Lists
//!
//! Prioritized todo-lists for a single-page application.
//!
//! This crate provides the list store (which keeps priorities numbered
//! `1..=N` in insertion order), the sorted overview projection, the
//! list-creation and detail views, and a small server that delivers the
//! compiled bundle.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;
#[cfg(feature = "server")]
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use app::{App, Screen};
pub use config::ServerConfig;
pub use domain::{
    store::ListStore,
    todo_list::{NewList, TodoItem, TodoList},
};
pub use error::{Result, TodoError};
pub use presentation::{DetailView, ListCreator, ListRow, Route};
pub use storage::SeedSource;
