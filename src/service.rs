//! Navigation service — serial, async front door to a [`Router`].
//!
//! DESIGN
//! ======
//! A single tokio task owns the router. Requests arrive on a bounded mpsc
//! queue and are handled one at a time in arrival order, so a request that
//! shows up while another is pending simply waits its turn. The auth store is
//! read fresh for every request: a login or logout between two queued
//! navigations is seen by the second one.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::auth::AuthStore;
use crate::error::ServiceError;
use crate::guard::NavigationGuard;
use crate::router::{NavigationOutcome, NavigationTarget, Router};
use crate::routes::Route;

enum Command {
    Navigate { target: NavigationTarget, reply: oneshot::Sender<NavigationOutcome> },
    Current { reply: oneshot::Sender<Option<Route>> },
}

/// Cloneable handle for submitting navigation requests.
#[derive(Clone, Debug)]
pub struct NavigationService {
    tx: mpsc::Sender<Command>,
}

impl NavigationService {
    /// Spawn the navigation task. It exits once every handle is dropped.
    pub fn spawn<G>(router: Router<G>, auth: AuthStore, queue_capacity: usize) -> (Self, JoinHandle<()>)
    where
        G: NavigationGuard + 'static,
    {
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        info!(queue_capacity, "navigation service started");
        let handle = tokio::spawn(run(router, auth, rx));
        (Self { tx }, handle)
    }

    /// Queue a navigation and wait for its outcome.
    pub async fn navigate(&self, target: impl Into<NavigationTarget>) -> Result<NavigationOutcome, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Navigate { target: target.into(), reply })
            .await
            .map_err(|_| ServiceError::Stopped)?;
        rx.await.map_err(|_| ServiceError::Stopped)
    }

    /// The current route after every previously queued request has landed.
    pub async fn current(&self) -> Result<Option<Route>, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Command::Current { reply }).await.map_err(|_| ServiceError::Stopped)?;
        rx.await.map_err(|_| ServiceError::Stopped)
    }
}

async fn run<G: NavigationGuard>(mut router: Router<G>, auth: AuthStore, mut rx: mpsc::Receiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Navigate { target, reply } => {
                let outcome = router.navigate(target, &auth.snapshot());
                // Caller may have stopped waiting; the navigation still stands.
                let _ = reply.send(outcome);
            }
            Command::Current { reply } => {
                let _ = reply.send(router.current().cloned());
            }
        }
    }
    debug!("navigation service stopped");
}
