//! Backend selection at startup.

use std::sync::Arc;

use tracing::{info, warn};

use chatgate_core::config::{DatabaseBackend, DatabaseConfig};
use chatgate_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryAccountStore;
use crate::migration::run_migrations;
use crate::repositories::PgAccountStore;
use crate::store::AccountStore;

/// The configured store plus the pool behind it, if any.
pub struct OpenedStore {
    /// Store handed to the services.
    pub store: Arc<dyn AccountStore>,
    /// PostgreSQL pool, kept so the caller can close it on shutdown.
    pub pool: Option<DatabasePool>,
}

/// Opens the store named by `config.backend`, running migrations first
/// when configured to.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<OpenedStore> {
    match config.backend {
        DatabaseBackend::Memory => {
            warn!("Using the in-memory account store; accounts are lost on restart");
            Ok(OpenedStore {
                store: Arc::new(MemoryAccountStore::new()),
                pool: None,
            })
        }
        DatabaseBackend::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            if config.run_migrations {
                run_migrations(pool.pool()).await?;
            } else {
                info!("Skipping migrations (database.run_migrations = false)");
            }
            Ok(OpenedStore {
                store: Arc::new(PgAccountStore::new(pool.pool().clone())),
                pool: Some(pool),
            })
        }
    }
}
