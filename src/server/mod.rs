pub mod listener;

use tokio::runtime;
use tracing::info;

use crate::config::Config;

/// Owns the worker runtime and the accept loop.
pub struct Server {
    cfg: Config,
}

impl Server {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Builds a multi-threaded runtime with the configured worker count and
    /// serves until the listener fails or a shutdown signal arrives.
    pub fn run(&self) -> anyhow::Result<()> {
        let rt = runtime::Builder::new_multi_thread()
            .worker_threads(self.cfg.server.worker_threads)
            .enable_all()
            .build()?;

        rt.block_on(async {
            tokio::select! {
                res = listener::run(&self.cfg) => res,

                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    Ok(())
                }
            }
        })
    }
}
