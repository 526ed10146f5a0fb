// Process lifecycle: release the store when the host asks us to stop

use crate::repository::{RepositoryError, UserRepository};
use std::fmt;
use tokio::signal;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Wait for Ctrl+C or SIGTERM
pub async fn wait_for_signal() -> std::io::Result<ShutdownSignal> {
    #[cfg(unix)]
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;

    let terminate = async {
        #[cfg(unix)]
        sigterm.recv().await;

        #[cfg(not(unix))]
        std::future::pending::<()>().await;
    };

    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            Ok(ShutdownSignal::Interrupt)
        }
        _ = terminate => Ok(ShutdownSignal::Terminate),
    }
}

/// Close the repository's connection pool.
///
/// In-flight requests are not drained; they are dropped with the runtime
/// once the caller returns. Failures are passed back to the caller.
pub async fn release_store(
    repository: &dyn UserRepository,
    signal: ShutdownSignal,
) -> Result<(), RepositoryError> {
    info!(signal = %signal, "Closing database connection");
    repository.disconnect().await
}
