//! Seed command - Creates the bootstrap admin account.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, Persistence};
use crate::services::{AuthService, Authenticator};

/// Execute the seed command.
///
/// Idempotent: if the configured admin username already has an
/// account, nothing is written.
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await;
    let username = config.admin_username.clone();

    let uow = Arc::new(Persistence::new(db.get_connection()));
    let auth = Authenticator::new(uow, config);

    if auth.ensure_admin().await? {
        tracing::info!(%username, "Bootstrap admin account created");
    } else {
        tracing::info!(%username, "Admin account already exists, nothing to do");
    }

    Ok(())
}
