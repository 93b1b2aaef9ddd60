//! Serve the classifier over HTTP

use nonsense::config::Config;

use crate::server::{self, ServerState};

/// Run the HTTP adapter until the process is stopped
pub fn serve(config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let state = ServerState::new(config.classifier(), config.bulk);
    server::serve(&host, port, &state)
}
