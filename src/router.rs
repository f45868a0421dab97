//! Router engine — resolves navigation requests and owns the current route.
//!
//! ARCHITECTURE
//! ============
//! `navigate` runs resolve → guard → apply, in that order, to completion. The
//! guard's decision is applied once: the current route moves on `Proceed`
//! or `RedirectTo`, and stays put on `Abort` or a resolution failure. A
//! redirect target is not re-evaluated by the guard.
//!
//! Every completed or redirected navigation emits one [`RenderSignal`] to each
//! subscriber. The view layer decides what a `ViewId` looks like on screen.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::auth::AuthState;
use crate::error::{NavError, RouteTableError};
use crate::guard::{GuardDecision, LoginGate, NavigationGuard};
use crate::routes::{Route, RouteTable, ViewId};

// =============================================================================
// REQUEST / OUTCOME
// =============================================================================

/// What the caller asked for: a path (leading `/`) or a route name.
///
/// The variant is a hint for logs; resolution goes through
/// [`RouteTable::resolve`], which tries paths before names either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Path(String),
    Name(String),
}

impl NavigationTarget {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(s) | Self::Name(s) => s,
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(raw: &str) -> Self {
        if raw.starts_with('/') { Self::Path(raw.to_string()) } else { Self::Name(raw.to_string()) }
    }
}

impl From<String> for NavigationTarget {
    fn from(raw: String) -> Self {
        if raw.starts_with('/') { Self::Path(raw) } else { Self::Name(raw) }
    }
}

/// A single navigation attempt. Discarded once resolved.
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub id: Uuid,
    pub target: NavigationTarget,
    pub origin: Option<Route>,
}

/// Result of `navigate`, reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Completed(Route),
    Redirected(Route),
    Aborted(NavError),
}

impl NavigationOutcome {
    /// The route the user ended up on, if the navigation moved them.
    #[must_use]
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Completed(route) | Self::Redirected(route) => Some(route),
            Self::Aborted(_) => None,
        }
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

/// Instruction to the view layer: render this view now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSignal {
    pub request_id: Uuid,
    pub route: String,
    pub path: String,
    pub view: ViewId,
}

// =============================================================================
// ROUTER
// =============================================================================

pub struct Router<G = LoginGate> {
    table: RouteTable,
    guard: G,
    current: Option<Route>,
    renderers: Vec<mpsc::UnboundedSender<RenderSignal>>,
}

impl Router<LoginGate> {
    /// Router over `table` gated by [`LoginGate`].
    pub fn with_login_gate(table: RouteTable) -> Result<Self, RouteTableError> {
        let guard = LoginGate::new(&table)?;
        Ok(Self::new(table, guard))
    }
}

impl<G: NavigationGuard> Router<G> {
    #[must_use]
    pub fn new(table: RouteTable, guard: G) -> Self {
        Self { table, guard, current: None, renderers: Vec::new() }
    }

    /// Where the user is now. `None` until the first navigation lands.
    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    /// Register a view-layer listener for render signals.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<RenderSignal> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.renderers.push(tx);
        rx
    }

    /// Resolve, guard, and apply one navigation request.
    pub fn navigate(&mut self, target: impl Into<NavigationTarget>, auth: &AuthState) -> NavigationOutcome {
        let request = NavigationRequest { id: Uuid::new_v4(), target: target.into(), origin: self.current.clone() };

        let resolved = match self.table.resolve(request.target.as_str()) {
            Ok(route) => route.clone(),
            Err(err) => {
                error!(request_id = %request.id, target = request.target.as_str(), "navigation to unregistered route");
                return NavigationOutcome::Aborted(err);
            }
        };

        let decision = self.guard.evaluate(&resolved, request.origin.as_ref(), auth);
        debug!(request_id = %request.id, route = %resolved.name, ?decision, "guard evaluated");

        let outcome = match decision {
            GuardDecision::Proceed => NavigationOutcome::Completed(resolved),
            GuardDecision::RedirectTo(other) => {
                warn!(request_id = %request.id, requested = %resolved.name, redirect = %other.name, "navigation redirected");
                NavigationOutcome::Redirected(other)
            }
            GuardDecision::Abort => {
                warn!(request_id = %request.id, route = %resolved.name, "navigation aborted by guard");
                return NavigationOutcome::Aborted(NavError::GuardRejected { route: resolved.name });
            }
        };

        if let Some(route) = outcome.route() {
            info!(
                request_id = %request.id,
                from = request.origin.as_ref().map_or("-", |r| r.name.as_str()),
                to = %route.name,
                "navigation completed"
            );
            self.current = Some(route.clone());
            self.emit_render(request.id, route);
        }

        outcome
    }

    fn emit_render(&mut self, request_id: Uuid, route: &Route) {
        let signal = RenderSignal {
            request_id,
            route: route.name.clone(),
            path: route.path.clone(),
            view: route.view.clone(),
        };
        // Drop listeners whose receiving end has gone away.
        self.renderers.retain(|tx| tx.send(signal.clone()).is_ok());
    }
}

impl<G> std::fmt::Debug for Router<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.len())
            .field("current", &self.current.as_ref().map(|r| r.name.as_str()))
            .field("renderers", &self.renderers.len())
            .finish_non_exhaustive()
    }
}
