//! Navigation guard — the global interceptor consulted on every transition.
//!
//! DESIGN
//! ======
//! A guard returns exactly one [`GuardDecision`], which the router consumes
//! once. There is no `next()` callback to invoke twice. [`LoginGate`] is a pure
//! function of the target's name and the token; it keeps no state between
//! calls.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::AuthState;
use crate::error::RouteTableError;
use crate::routes::{LOGIN_PAGE, Route, RouteTable};

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectTo(Route),
    Abort,
}

/// Interceptor the router runs before completing any navigation.
pub trait NavigationGuard: Send + Sync {
    fn evaluate(&self, target: &Route, origin: Option<&Route>, auth: &AuthState) -> GuardDecision;
}

impl<F> NavigationGuard for F
where
    F: Fn(&Route, Option<&Route>, &AuthState) -> GuardDecision + Send + Sync,
{
    fn evaluate(&self, target: &Route, origin: Option<&Route>, auth: &AuthState) -> GuardDecision {
        self(target, origin, auth)
    }
}

/// Sends unauthenticated users to the login route. The login route itself is
/// always reachable, including for users who already hold a token.
#[derive(Debug, Clone)]
pub struct LoginGate {
    login: Route,
}

impl LoginGate {
    /// Build the gate from a table that must contain [`LOGIN_PAGE`].
    pub fn new(table: &RouteTable) -> Result<Self, RouteTableError> {
        let login = table
            .get(LOGIN_PAGE)
            .cloned()
            .ok_or(RouteTableError::MissingLoginRoute(LOGIN_PAGE))?;
        Ok(Self { login })
    }

    #[must_use]
    pub fn login_route(&self) -> &Route {
        &self.login
    }
}

impl NavigationGuard for LoginGate {
    fn evaluate(&self, target: &Route, _origin: Option<&Route>, auth: &AuthState) -> GuardDecision {
        if !auth.is_authenticated() && target.name != self.login.name {
            GuardDecision::RedirectTo(self.login.clone())
        } else {
            GuardDecision::Proceed
        }
    }
}
