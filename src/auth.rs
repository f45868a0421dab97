//! Authentication state read by the navigation guard.
//!
//! DESIGN
//! ======
//! [`AuthState`] is a plain value: the guard takes it as a parameter and never
//! reaches into shared state. [`AuthStore`] is the process-wide handle the
//! embedding application owns; login and logout write to it, navigation only
//! ever takes a fresh [`AuthStore::snapshot`] at evaluation time.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Credential marker. An empty token means unauthenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
}

impl AuthState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// Any non-empty token counts. No validity or expiry check.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Shared, cloneable handle to the current [`AuthState`].
#[derive(Clone, Debug, Default)]
pub struct AuthStore {
    inner: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    #[must_use]
    pub fn new(state: AuthState) -> Self {
        Self { inner: Arc::new(RwLock::new(state)) }
    }

    /// Consistent copy of the state as of now.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.token = token.into();
    }

    pub fn clear(&self) {
        self.set_token(String::new());
    }
}
