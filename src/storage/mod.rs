use crate::{domain::TodoList, error::Result};
use async_trait::async_trait;

pub mod fixture;

pub use fixture::{JsonFixture, StaticSeed};

/// Source of the initial collection of todo lists
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Loads the seed lists in their stored order
    async fn load(&self) -> Result<Vec<TodoList>>;
}
