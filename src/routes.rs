//! Route table — the static registry of named, path-addressable views.
//!
//! DESIGN
//! ======
//! Routes are data. The questionnaire app's routes live in [`ROUTE_DEFS`], a
//! plain declarative list; adding a screen means adding a row, never a
//! branch. The table indexes routes by path and by name so `resolve` is a
//! pair of hash lookups.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, RouteTableError};

// =============================================================================
// ROUTE NAMES
// =============================================================================

pub const LOGIN_PAGE: &str = "LoginPage";
pub const LANDING_PAGE: &str = "LandingPage";
pub const SELECT_PROGRAM: &str = "SelectProgram";
pub const QUESTIONNAIRE: &str = "Questionnaire";
pub const ANSWERS: &str = "Answers";
pub const END_PAGE: &str = "EndPage";

/// One row of the static route list: `(path, name, view)`.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: &'static str,
}

/// Routes of the questionnaire application.
pub const ROUTE_DEFS: &[RouteDef] = &[
    RouteDef { path: "/LoginPage", name: LOGIN_PAGE, view: LOGIN_PAGE },
    RouteDef { path: "/Answers", name: ANSWERS, view: ANSWERS },
    RouteDef { path: "/EndPage", name: END_PAGE, view: END_PAGE },
    RouteDef { path: "/Questionnaire", name: QUESTIONNAIRE, view: QUESTIONNAIRE },
    RouteDef { path: "/", name: LANDING_PAGE, view: LANDING_PAGE },
    RouteDef { path: "/SelectProgram", name: SELECT_PROGRAM, view: SELECT_PROGRAM },
];

// =============================================================================
// TYPES
// =============================================================================

/// Opaque identifier the view layer maps to a rendered screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named destination bound to a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub view: ViewId,
}

impl Route {
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewId) -> Self {
        Self { path: path.into(), name: name.into(), view }
    }
}

impl From<&RouteDef> for Route {
    fn from(def: &RouteDef) -> Self {
        Self::new(def.path, def.name, ViewId::new(def.view))
    }
}

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// Immutable registry of routes with unique names and unique paths.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate names or paths.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
            if by_path.insert(route.path.clone(), index).is_some() {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
        }

        Ok(Self { routes, by_path, by_name })
    }

    /// The questionnaire application's table, built from [`ROUTE_DEFS`].
    ///
    /// # Panics
    ///
    /// Only if [`ROUTE_DEFS`] gains a duplicate name or path. The list is a
    /// compile-time constant validated by `new` like any other table, so such
    /// an edit fails every test that builds this table.
    #[must_use]
    pub fn questionnaire() -> Self {
        let routes = ROUTE_DEFS.iter().map(Route::from).collect();
        Self::new(routes).expect("ROUTE_DEFS names and paths are unique")
    }

    /// Load a table from a JSON array of `{ "path", "name", "view" }` objects.
    pub fn from_json(json: &str) -> Result<Self, RouteTableError> {
        let routes: Vec<Route> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    /// Look up a route by path first, then by name.
    pub fn resolve(&self, path_or_name: &str) -> Result<&Route, NavError> {
        self.by_path
            .get(path_or_name)
            .or_else(|| self.by_name.get(path_or_name))
            .map(|&index| &self.routes[index])
            .ok_or_else(|| NavError::RouteNotFound { target: path_or_name.to_string() })
    }

    /// Look up a route by name only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    /// Look up a route by path only.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&index| &self.routes[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::questionnaire()
    }
}
