use crate::config::ServerConfig;
use crate::error::ServerResult;
use catalog::Catalog;
use matcher::{Engine, MatchConfig};
use normalize::NormalizeConfig;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Catalog loaded once at startup (shared across requests)
    pub catalog: Arc<Catalog>,

    /// Matching engine (shared across requests)
    pub engine: Arc<Engine>,
}

impl ServerState {
    /// Create new server state.
    ///
    /// Loads the dataset from `config.dataset_path` and fails fast on any
    /// catalog error — the server must never start serving with a missing
    /// or malformed dataset.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let catalog = Arc::new(Catalog::load_from_path(&config.dataset_path)?);
        Self::with_catalog(config, catalog)
    }

    /// Create server state over an already-built catalog.
    pub fn with_catalog(config: ServerConfig, catalog: Arc<Catalog>) -> ServerResult<Self> {
        if catalog.is_empty() {
            tracing::warn!("dataset is empty; every query will fail with an internal error");
        }

        let mut match_cfg = MatchConfig::default();
        if let Some(threshold) = config.threshold {
            match_cfg.threshold = threshold;
        }
        let engine = Arc::new(Engine::new(
            catalog.clone(),
            NormalizeConfig::default(),
            match_cfg,
        )?);

        Ok(Self {
            config: Arc::new(config),
            catalog,
            engine,
        })
    }
}
