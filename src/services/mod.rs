//! Business logic services

pub mod catalog;
pub mod rentals;
pub mod stats;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub rentals: rentals::RentalsService,
    pub users: users::UsersService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
