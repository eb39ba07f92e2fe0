//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use dropcode_core::config::AppConfig;
use dropcode_core::traits::clock::{Clock, SystemClock};
use dropcode_core::traits::storage::StorageProvider;
use dropcode_service::share::{CodeGenerator, CodeSource, EntryStore, ExpiryPolicy};
use dropcode_service::{ReclamationSweeper, RetrievalResolver, ShareService};
use dropcode_storage::LocalStorageProvider;

/// Shared application state, cloned into each handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Effective configuration.
    pub config: Arc<AppConfig>,
    /// Time source for response timestamps.
    pub clock: Arc<dyn Clock>,
    /// Backing storage, used for health checks.
    pub storage: Arc<dyn StorageProvider>,
    /// Write side: accepts new shares.
    pub share_service: Arc<ShareService>,
    /// Read side: resolves codes to live entries.
    pub resolver: Arc<RetrievalResolver>,
    /// Reclamation of expired entries.
    pub sweeper: Arc<ReclamationSweeper>,
}

impl AppState {
    /// Wire the share store from configuration, with the real clock and random codes.
    pub fn from_config(config: AppConfig) -> Self {
        Self::with_parts(config, Arc::new(SystemClock), Arc::new(CodeGenerator::new()))
    }

    /// Wire the share store with an explicit clock and code source.
    pub fn with_parts(
        config: AppConfig,
        clock: Arc<dyn Clock>,
        codes: Arc<dyn CodeSource>,
    ) -> Self {
        let storage: Arc<dyn StorageProvider> =
            Arc::new(LocalStorageProvider::new(&config.storage.uploads_dir));
        let store = Arc::new(EntryStore::new(Arc::clone(&storage)));
        let policy = ExpiryPolicy::new();

        let share_service = Arc::new(ShareService::new(
            Arc::clone(&store),
            codes,
            policy,
            Arc::clone(&clock),
            config.share.clone(),
        ));
        let resolver = Arc::new(RetrievalResolver::new(
            Arc::clone(&store),
            policy,
            Arc::clone(&clock),
        ));
        let sweeper = Arc::new(ReclamationSweeper::new(store, policy, Arc::clone(&clock)));

        Self {
            config: Arc::new(config),
            clock,
            storage,
            share_service,
            resolver,
            sweeper,
        }
    }
}
