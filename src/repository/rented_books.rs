//! Rented books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::rented_book::{CreateRentedBook, RentedBook, UpdateRentedBook},
    repository::map_constraint_error,
};

#[derive(Clone)]
pub struct RentedBooksRepository {
    pool: Pool<Postgres>,
}

impl RentedBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get rented book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<RentedBook> {
        sqlx::query_as::<_, RentedBook>(
            "SELECT id, title, rent_date, return_date, customer_id FROM rented_books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rented book with id {} not found", id)))
    }

    /// List all rented books
    pub async fn list(&self) -> AppResult<Vec<RentedBook>> {
        let books = sqlx::query_as::<_, RentedBook>(
            "SELECT id, title, rent_date, return_date, customer_id FROM rented_books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Create a new rented book; the customer must exist
    pub async fn create(&self, book: &CreateRentedBook) -> AppResult<RentedBook> {
        sqlx::query_as::<_, RentedBook>(
            r#"
            INSERT INTO rented_books (title, rent_date, return_date, customer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, rent_date, return_date, customer_id
            "#,
        )
        .bind(&book.title)
        .bind(book.rent_date)
        .bind(book.return_date)
        .bind(book.customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_error(
                e,
                "Rented book already exists",
                &format!("Customer with id {} does not exist", book.customer_id),
            )
        })
    }

    /// Update an existing rented book; only fields still present after
    /// normalization are written.
    pub async fn update(&self, id: i32, changes: &UpdateRentedBook) -> AppResult<RentedBook> {
        // Build dynamic update query
        let mut sets = Vec::new();
        let mut param_idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(changes.title, "title");
        add_field!(changes.rent_date, "rent_date");
        add_field!(changes.return_date, "return_date");
        add_field!(changes.customer_id, "customer_id");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE rented_books SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(changes.title);
        bind_field!(changes.rent_date);
        bind_field!(changes.return_date);
        bind_field!(changes.customer_id);

        let fk_msg = match changes.customer_id {
            Some(customer_id) => format!("Customer with id {} does not exist", customer_id),
            None => "Invalid customer reference".to_string(),
        };

        let result = builder
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_constraint_error(e, "Rented book already exists", &fk_msg))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Rented book with id {} not found",
                id
            )));
        }

        self.get_by_id(id).await
    }

    /// Delete a rented book
    pub async fn delete(&self, id: i32) -> AppResult<RentedBook> {
        sqlx::query_as::<_, RentedBook>(
            r#"
            DELETE FROM rented_books WHERE id = $1
            RETURNING id, title, rent_date, return_date, customer_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Rented book with id {} not found", id)))
    }
}
