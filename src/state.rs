use crate::auth::store::UserStore;
use crate::config::AppConfig;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state, owned by the composition root. The store sits
/// behind a mutex: every load-mutate-persist sequence runs while the lock
/// is held, so concurrent requests cannot interleave file rewrites.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<UserStore>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = UserStore::open(&config.users_file)
            .with_context(|| format!("open user store at {}", config.users_file.display()))?;
        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: UserStore, config: Arc<AppConfig>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }
}
