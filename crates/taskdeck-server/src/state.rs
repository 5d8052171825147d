use anyhow::Result;
use std::sync::Arc;
use taskdeck_identity::IdentityService;
use taskdeck_storage::RocksDbStorage;
use taskdeck_tasks::{ProfileService, TaskService};

use crate::config::Config;

type Identities = IdentityService<RocksDbStorage>;
type Tasks = TaskService<RocksDbStorage>;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration (for future use in handlers)
    #[allow(dead_code)]
    pub config: Config,
    /// Direct storage access (readiness probe)
    pub storage: Arc<RocksDbStorage>,
    pub identity_service: Arc<Identities>,
    pub task_service: Arc<Tasks>,
    pub profile_service: Arc<ProfileService<Identities, Tasks>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let storage = Arc::new(RocksDbStorage::open(&config.database_path)?);

        let identity_service = Arc::new(IdentityService::new(storage.clone()));
        let task_service = Arc::new(TaskService::new(storage.clone()));
        let profile_service = Arc::new(ProfileService::new(
            identity_service.clone(),
            task_service.clone(),
        ));

        Ok(AppState {
            config,
            storage,
            identity_service,
            task_service,
            profile_service,
        })
    }
}
