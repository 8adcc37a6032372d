//! CLI bootstrap - the composition root for client commands.
//!
//! Every command that talks to a running server goes through one
//! [`CliContext`] built here. Handlers depend on the
//! [`CatalogGateway`] trait, never on a concrete HTTP client.

use std::fmt;
use std::sync::Arc;

use wares_client::{ApiClient, CatalogGateway};

use crate::error::CliError;

/// Dependencies shared by the client-side command handlers.
pub struct CliContext {
    gateway: Arc<dyn CatalogGateway>,
    server: String,
}

impl CliContext {
    /// The gateway used to reach the catalog server.
    pub fn gateway(&self) -> &Arc<dyn CatalogGateway> {
        &self.gateway
    }

    /// Base URL the context was built against.
    pub fn server(&self) -> &str {
        &self.server
    }
}

impl fmt::Debug for CliContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliContext").finish()
    }
}

/// Build the CLI context for a server base URL.
pub fn bootstrap(server: &str) -> Result<CliContext, CliError> {
    let client = ApiClient::new(server)
        .map_err(|err| CliError::Arguments(format!("invalid server URL '{server}': {err}")))?;

    Ok(CliContext {
        gateway: Arc::new(client),
        server: server.to_string(),
    })
}

/// Build a context around an arbitrary gateway, for handler tests.
#[cfg(test)]
pub(crate) fn bootstrap_with(gateway: Arc<dyn CatalogGateway>, server: &str) -> CliContext {
    CliContext {
        gateway,
        server: server.to_string(),
    }
}
