//! Navigation configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::routes::RouteTable;

pub const DEFAULT_INITIAL_PATH: &str = "/";
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub initial_path: String,
    pub token: String,
    pub queue_capacity: usize,
    pub routes_file: Option<PathBuf>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            initial_path: DEFAULT_INITIAL_PATH.to_string(),
            token: String::new(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            routes_file: None,
        }
    }
}

impl NavConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `NAV_INITIAL_PATH`: first navigation target, default `/`
    /// - `NAV_TOKEN`: starting auth token, default empty (signed out)
    /// - `NAV_QUEUE_CAPACITY`: navigation queue depth, default 16
    /// - `NAV_ROUTES_FILE`: JSON route table replacing the built-in one
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let queue_capacity = match lookup("NAV_QUEUE_CAPACITY") {
            Some(raw) => parse_capacity(&raw)?,
            None => DEFAULT_QUEUE_CAPACITY,
        };

        Ok(Self {
            initial_path: lookup("NAV_INITIAL_PATH")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_INITIAL_PATH.to_string()),
            token: lookup("NAV_TOKEN").unwrap_or_default(),
            queue_capacity,
            routes_file: lookup("NAV_ROUTES_FILE").filter(|v| !v.is_empty()).map(PathBuf::from),
        })
    }

    /// The configured route table: the routes file when set, else the
    /// built-in questionnaire routes.
    pub fn route_table(&self) -> Result<RouteTable, ConfigError> {
        let Some(path) = &self.routes_file else {
            return Ok(RouteTable::questionnaire());
        };
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::RoutesFile { path: path.display().to_string(), message: e.to_string() })?;
        Ok(RouteTable::from_json(&json)?)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue { key: "NAV_QUEUE_CAPACITY", value: raw.to_string() }),
    }
}
