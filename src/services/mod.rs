//! Business logic services

pub mod auth;
pub mod customers;
pub mod rented_books;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub customers: customers::CustomersService,
    pub rented_books: rented_books::RentedBooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            customers: customers::CustomersService::new(repository.clone()),
            rented_books: rented_books::RentedBooksService::new(repository),
        }
    }
}
