//! Data models for the book rental server

pub mod customer;
pub mod rented_book;
pub mod user;

// Re-export commonly used types
pub use customer::{CreateCustomer, Customer, UpdateCustomer};
pub use rented_book::{CreateRentedBook, RentedBook, UpdateRentedBook};
pub use user::{User, UserClaims};
