use crate::error::{Result, TodoError};
use serde::Deserialize;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};
use tokio::fs;

/// Settings for the static bundle server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the compiled bundle
    pub static_dir: PathBuf,
    /// HTML document returned for every non-asset path
    pub index_file: PathBuf,
    /// JSON fixture with the initial lists; the built-in seed when unset
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    pub const DEFAULT_FILE: &'static str = "todo-lists.toml";
    pub const PORT_ENV: &'static str = "TODO_LISTS_PORT";

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, `todo-lists.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(Self::DEFAULT_FILE);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let contents = fs::read_to_string(&path).await.map_err(|e| {
            TodoError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| TodoError::ConfigError(e.to_string()))
    }

    /// Applies environment overrides using the given lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(Self::PORT_ENV) {
            self.port = port.trim().parse().map_err(|_| {
                TodoError::ConfigError(format!("{} is not a valid port: {}", Self::PORT_ENV, port))
            })?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            static_dir: PathBuf::from("dist/static"),
            index_file: PathBuf::from("dist/index.html"),
            seed_file: None,
        }
    }
}
