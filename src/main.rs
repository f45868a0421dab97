//! Line-oriented driver for the navigation layer.
//!
//! Commands on stdin: `go <path|name>`, `login <token>`, `logout`, `where`,
//! `routes`, `quit`. Render signals are printed to stdout as JSON lines.

use tokio::io::{AsyncBufReadExt, BufReader};

use questionnaire_nav::config::NavConfig;
use questionnaire_nav::{AuthState, AuthStore, ErrorCode, NavigationOutcome, NavigationService, Router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = NavConfig::from_env().inspect_err(|e| {
        tracing::error!(code = e.error_code(), error = %e, "invalid navigation config");
    })?;
    let table = config.route_table()?;
    let routes = table.iter().map(|r| format!("{} {}", r.path, r.name)).collect::<Vec<_>>();

    let mut router = Router::with_login_gate(table)?;
    let mut renders = router.subscribe();
    tokio::spawn(async move {
        while let Some(signal) = renders.recv().await {
            match serde_json::to_string(&signal) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!(error = %e, "render signal encode failed"),
            }
        }
    });

    let auth = AuthStore::new(AuthState::with_token(config.token.clone()));
    let (nav, _task) = NavigationService::spawn(router, auth.clone(), config.queue_capacity);

    tracing::info!(initial = %config.initial_path, routes = routes.len(), "navigation ready");
    report(nav.navigate(config.initial_path.as_str()).await?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("go"), Some(target)) => report(nav.navigate(target).await?),
            (Some("login"), Some(token)) => {
                auth.set_token(token);
                tracing::info!("signed in");
            }
            (Some("logout"), None) => {
                auth.clear();
                tracing::info!("signed out");
            }
            (Some("where"), None) => match nav.current().await? {
                Some(route) => eprintln!("{} ({})", route.name, route.path),
                None => eprintln!("nowhere yet"),
            },
            (Some("routes"), None) => routes.iter().for_each(|r| eprintln!("{r}")),
            (Some("quit"), None) => break,
            (None, _) => {}
            _ => tracing::warn!(%line, "unrecognized command"),
        }
    }

    Ok(())
}

fn report(outcome: NavigationOutcome) {
    match outcome {
        NavigationOutcome::Completed(route) => eprintln!("-> {}", route.name),
        NavigationOutcome::Redirected(route) => eprintln!("-> {} (redirected)", route.name),
        NavigationOutcome::Aborted(err) => eprintln!("!! {} [{}]", err, err.error_code()),
    }
}
