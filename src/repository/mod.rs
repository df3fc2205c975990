//! Repository layer for database operations

pub mod customers;
pub mod rented_books;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppError;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub customers: customers::CustomersRepository,
    pub rented_books: rented_books::RentedBooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            rented_books: rented_books::RentedBooksRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Promote Postgres constraint violations to typed errors so the boundary
/// answers 409/400 instead of a generic 500.
pub(crate) fn map_constraint_error(
    err: sqlx::Error,
    unique_msg: &str,
    fk_msg: &str,
) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        match db.code().as_deref() {
            // unique_violation
            Some("23505") => return AppError::Conflict(unique_msg.to_string()),
            // foreign_key_violation
            Some("23503") => return AppError::BadRequest(fk_msg.to_string()),
            _ => {}
        }
    }
    AppError::Database(err)
}
