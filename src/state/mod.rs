//! Shared application state: the installed storage backend, the degraded
//! flag, the session cache, and the loaded configuration.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use crate::{
    config::AppConfig, dao::models::SessionEntity, dao::sprite_store::SpriteStore,
    error::ServiceError,
};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state shared by every request handler.
pub struct AppState {
    sprite_store: RwLock<Option<Arc<dyn SpriteStore>>>,
    degraded: watch::Sender<bool>,
    sessions: DashMap<Uuid, SessionEntity>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned
    /// cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is
    /// installed.
    pub fn new(config: AppConfig) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(true);
        Arc::new(Self {
            sprite_store: RwLock::new(None),
            degraded: degraded_tx,
            sessions: DashMap::new(),
            config,
        })
    }

    /// Loaded runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain a handle to the current sprite store, if one is installed.
    pub async fn sprite_store(&self) -> Option<Arc<dyn SpriteStore>> {
        let guard = self.sprite_store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the current sprite store or fail with a degraded-mode error.
    pub async fn require_sprite_store(&self) -> Result<Arc<dyn SpriteStore>, ServiceError> {
        self.sprite_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a storage backend and leave degraded mode.
    pub async fn set_sprite_store(&self, store: Arc<dyn SpriteStore>) {
        {
            let mut guard = self.sprite_store.write().await;
            *guard = Some(store);
        }
        self.update_degraded(false);
    }

    /// Current degraded flag.
    pub fn is_degraded(&self) -> bool {
        *self.degraded.borrow()
    }

    /// Update the degraded flag; the store stays installed so the supervisor
    /// can keep retrying through the same handle.
    pub fn update_degraded(&self, value: bool) {
        self.degraded.send_replace(value);
    }

    /// In-memory session cache keyed by token, shadowing the sessions table.
    pub fn sessions(&self) -> &DashMap<Uuid, SessionEntity> {
        &self.sessions
    }
}
