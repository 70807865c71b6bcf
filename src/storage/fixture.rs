use crate::{
    domain::TodoList,
    error::Result,
    storage::SeedSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The built-in seed used when no fixture file is configured
#[derive(Debug, Clone, Default)]
pub struct StaticSeed;

impl StaticSeed {
    pub fn lists() -> Vec<TodoList> {
        vec![
            TodoList::new("My First List", 1),
            TodoList::new("React 101 Lesson Plan", 2),
            TodoList::new("Shopping List", 3),
        ]
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load(&self) -> Result<Vec<TodoList>> {
        Ok(Self::lists())
    }
}

/// Seed read from a JSON array of `{title, priority, items?}` objects
pub struct JsonFixture {
    path: PathBuf,
}

impl JsonFixture {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeedSource for JsonFixture {
    async fn load(&self) -> Result<Vec<TodoList>> {
        let contents = fs::read_to_string(&self.path).await?;
        let lists: Vec<TodoList> = serde_json::from_str(&contents)?;

        tracing::debug!(path = %self.path.display(), count = lists.len(), "loaded seed fixture");
        Ok(lists)
    }
}
