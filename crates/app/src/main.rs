//! Command line dashboard over the finance API.
//!
//! Resolves the stored session (logging in with configured credentials when
//! needed), pulls one snapshot of every collection and prints the aggregated
//! dashboard.

use client::{ApiClient, Session, SessionStore, TokenStore, fetch_snapshot};

use crate::error::{AppError, Result};

mod config;
mod error;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fintrack={level},client={level}",
            level = settings.log_level
        ))
        .init();

    let tokens = TokenStore::open(&settings.session_path)?;
    let mut session = SessionStore::new(&settings.base_url, tokens)?;

    if matches!(session.session(), Session::Resolving) {
        session.resolve().await?;
    }

    if !session.session().is_authenticated() {
        if settings.username.is_empty() || settings.password.is_empty() {
            return Err(AppError::Session(
                "not logged in and no credentials configured; set username and \
                 password in the config file or FINTRACK_USERNAME / FINTRACK_PASSWORD"
                    .to_string(),
            ));
        }
        tracing::info!(username = %settings.username, "logging in");
        session.login(&settings.username, &settings.password).await?;
    }

    let Some(user) = session.user().cloned() else {
        return Err(AppError::Session(
            "session did not resolve to a user".to_string(),
        ));
    };

    let api = ApiClient::new(&settings.base_url)?;
    let snapshot = fetch_snapshot(&api, &session.auth_headers()).await?;
    let today = chrono::Local::now().date_naive();

    print!("{}", render::dashboard(&snapshot, &user, today));
    Ok(())
}
