//! Rented book management service

use crate::{
    error::AppResult,
    models::rented_book::{CreateRentedBook, RentedBook, UpdateRentedBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentedBooksService {
    repository: Repository,
}

impl RentedBooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get rented book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<RentedBook> {
        self.repository.rented_books.get_by_id(id).await
    }

    /// List all rented books
    pub async fn list(&self) -> AppResult<Vec<RentedBook>> {
        self.repository.rented_books.list().await
    }

    /// Create a new rented book for an existing customer
    pub async fn create(&self, book: CreateRentedBook) -> AppResult<RentedBook> {
        self.repository.rented_books.create(&book).await
    }

    /// Update a rented book. Fields the caller left empty are dropped before
    /// the write, so they keep their stored value.
    pub async fn update(&self, id: i32, changes: UpdateRentedBook) -> AppResult<RentedBook> {
        let changes = changes.normalized();
        self.repository.rented_books.update(id, &changes).await
    }

    /// Delete a rented book
    pub async fn delete(&self, id: i32) -> AppResult<RentedBook> {
        self.repository.rented_books.delete(id).await
    }
}
