//! Customer management service

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer, UpdateCustomer},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }

    /// List all customers
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.list().await
    }

    /// Create a new customer
    pub async fn create(&self, customer: CreateCustomer) -> AppResult<Customer> {
        self.repository.customers.create(&customer).await
    }

    /// Update a customer. Fields the caller left empty are dropped before
    /// the write, so they keep their stored value.
    pub async fn update(&self, id: i32, changes: UpdateCustomer) -> AppResult<Customer> {
        let changes = changes.normalized();
        self.repository.customers.update(id, &changes).await
    }

    /// Delete a customer and, through the cascade, its rented books
    pub async fn delete(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.delete(id).await
    }
}
