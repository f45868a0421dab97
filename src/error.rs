//! Error types for route resolution, table construction, config, and the
//! navigation service.
//!
//! DESIGN
//! ======
//! Every error carries a grepable `E_*` code through [`ErrorCode`]. Nothing in
//! this crate is retryable: navigation is replayed by the user, not by us.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Grepable error code plus retry hint, shared by all error enums.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Reasons a navigation attempt ends in `Aborted`.
///
/// Cloneable and comparable so it can be carried inside a
/// [`NavigationOutcome`](crate::router::NavigationOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// No registered route matches the requested path or name. Always a
    /// broken link or misconfigured caller.
    #[error("route not found: {target}")]
    RouteNotFound { target: String },

    /// The guard blocked the transition outright.
    #[error("navigation to {route} rejected by guard")]
    GuardRejected { route: String },
}

impl ErrorCode for NavError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RouteNotFound { .. } => "E_ROUTE_NOT_FOUND",
            Self::GuardRejected { .. } => "E_GUARD_REJECTED",
        }
    }
}

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// Problems found while building a [`RouteTable`](crate::routes::RouteTable).
#[derive(Debug, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    /// The login gate needs a `LoginPage` route to redirect to.
    #[error("route table has no {0} route")]
    MissingLoginRoute(&'static str),

    #[error("route table parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ErrorCode for RouteTableError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "E_DUPLICATE_ROUTE_NAME",
            Self::DuplicatePath(_) => "E_DUPLICATE_ROUTE_PATH",
            Self::MissingLoginRoute(_) => "E_MISSING_LOGIN_ROUTE",
            Self::Parse(_) => "E_ROUTE_TABLE_PARSE",
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to read routes file {path}: {message}")]
    RoutesFile { path: String, message: String },

    #[error(transparent)]
    RouteTable(#[from] RouteTableError),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "E_CONFIG_INVALID",
            Self::RoutesFile { .. } => "E_ROUTES_FILE",
            Self::RouteTable(e) => e.error_code(),
        }
    }
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The navigation task has exited and no longer accepts requests.
    #[error("navigation service stopped")]
    Stopped,
}

impl ErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Stopped => "E_SERVICE_STOPPED",
        }
    }
}
