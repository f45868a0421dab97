//! # questionnaire-nav
//!
//! Client-side navigation for the questionnaire app: a static route table,
//! a router engine that tracks where the user is, and a global guard that
//! sends anyone without an auth token to the login view.
//!
//! Views are opaque here. The router emits a [`router::RenderSignal`]
//! carrying a `ViewId` and the view layer takes it from there.

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod router;
pub mod routes;
pub mod service;

pub use auth::{AuthState, AuthStore};
pub use error::{ConfigError, ErrorCode, NavError, RouteTableError, ServiceError};
pub use guard::{GuardDecision, LoginGate, NavigationGuard};
pub use router::{NavigationOutcome, NavigationTarget, RenderSignal, Router};
pub use routes::{Route, RouteTable, ViewId};
pub use service::NavigationService;
