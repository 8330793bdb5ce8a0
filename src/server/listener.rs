use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Session;

/// Binds the listen address and accepts connections forever.
///
/// A failed accept (fd exhaustion, transient network errors) is logged and
/// the loop keeps going; only a failed bind takes the listener down.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let static_files = cfg.static_files.clone();
        tokio::spawn(async move {
            if let Err(e) = Session::new(socket, static_files).run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
