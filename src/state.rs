use crate::config::AppConfig;
use crate::users::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::from_parts(Arc::new(config), Arc::new(UserStore::new())))
    }

    pub fn from_parts(config: Arc<AppConfig>, users: Arc<UserStore>) -> Self {
        Self { config, users }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = AppConfig::from_lookup(|_| None).expect("default config");
        Self::from_parts(Arc::new(config), Arc::new(UserStore::new()))
    }
}
