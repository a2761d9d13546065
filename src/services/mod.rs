//! Business logic services

pub mod auth;
pub mod catalog;
pub mod profiles;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub profiles: profiles::ProfileService,
    pub catalog: catalog::CatalogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            profiles: profiles::ProfileService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            repository,
        }
    }

    /// Database round trip used by the readiness probe
    pub async fn ping_database(&self) -> AppResult<()> {
        self.repository.health.ping().await
    }
}
