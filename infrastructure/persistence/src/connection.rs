use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::db::{DatabaseConfig, DatabaseError, DatabaseHandle, create_postgres_pool};

const CLOSE_TIMEOUT: Duration = Duration::from_secs(10);

enum ConnectionState {
    Uninitialized,
    Ready(DatabaseHandle),
    Disabled,
}

/// Observable lifecycle phase of a [`ConnectionManager`].
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectionPhase {
    Uninitialized,
    Ready,
    Disabled,
}

/// Owns the process-wide optional connection pool.
///
/// Starts uninitialized. `initialize` moves it to ready (a URL was configured)
/// or disabled (none was). `shutdown` closes a ready pool and goes back to
/// uninitialized.
pub struct ConnectionManager {
    state: RwLock<ConnectionState>,
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ConnectionState::Uninitialized),
        }
    }

    /// Builds the pool when `config` is present, otherwise disables storage.
    ///
    /// No connection is opened here. Calling it again once ready or disabled is
    /// a no-op.
    pub fn initialize(&self, config: Option<&DatabaseConfig>) -> Result<(), DatabaseError> {
        let mut state = self.write();
        if !matches!(*state, ConnectionState::Uninitialized) {
            return Ok(());
        }

        *state = match config {
            Some(config) => {
                let pool = create_postgres_pool(config)?;
                tracing::info!(
                    max_connections = config.max_connections,
                    "database pool created"
                );
                ConnectionState::Ready(DatabaseHandle::new(pool, config.query_timeout))
            }
            None => {
                tracing::info!("no database configured, storage disabled");
                ConnectionState::Disabled
            }
        };
        Ok(())
    }

    /// The pool handle, or `None` when storage is disabled or not initialized.
    pub fn current(&self) -> Option<DatabaseHandle> {
        match &*self.read() {
            ConnectionState::Ready(handle) => Some(handle.clone()),
            ConnectionState::Uninitialized | ConnectionState::Disabled => None,
        }
    }

    #[cfg(test)]
    fn phase(&self) -> ConnectionPhase {
        match &*self.read() {
            ConnectionState::Uninitialized => ConnectionPhase::Uninitialized,
            ConnectionState::Ready(_) => ConnectionPhase::Ready,
            ConnectionState::Disabled => ConnectionPhase::Disabled,
        }
    }

    /// Drains and closes a ready pool. Safe to call in any phase, any number of times.
    ///
    /// Close failures are returned, not logged.
    pub async fn shutdown(&self) -> Result<(), DatabaseError> {
        let handle = {
            let mut state = self.write();
            match std::mem::replace(&mut *state, ConnectionState::Uninitialized) {
                ConnectionState::Ready(handle) => handle,
                ConnectionState::Disabled => {
                    *state = ConnectionState::Disabled;
                    return Ok(());
                }
                ConnectionState::Uninitialized => return Ok(()),
            }
        };

        tokio::time::timeout(CLOSE_TIMEOUT, handle.into_pool().close())
            .await
            .map_err(|_| DatabaseError::CloseTimedOut)
    }

    fn read(&self) -> RwLockReadGuard<'_, ConnectionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConnectionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
