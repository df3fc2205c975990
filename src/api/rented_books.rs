//! Rented book management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::rented_book::{CreateRentedBook, RentedBook, UpdateRentedBook},
};

use super::{AppJson, AuthenticatedUser, MessageResponse};

/// List all rented books
#[utoipa::path(
    get,
    path = "/rented_books",
    tag = "rented_books",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of rented books", body = Vec<RentedBook>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_rented_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<RentedBook>>> {
    let books = state.services.rented_books.list().await?;
    Ok(Json(books))
}

/// Get rented book details by ID
#[utoipa::path(
    get,
    path = "/rented_books/{id}",
    tag = "rented_books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Rented book ID")
    ),
    responses(
        (status = 200, description = "Rented book details", body = RentedBook),
        (status = 404, description = "Rented book not found")
    )
)]
pub async fn get_rented_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<RentedBook>> {
    let book = state.services.rented_books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a new rented book
#[utoipa::path(
    post,
    path = "/rented_books",
    tag = "rented_books",
    security(("bearer_auth" = [])),
    request_body = CreateRentedBook,
    responses(
        (status = 200, description = "Rented book created", body = RentedBook),
        (status = 400, description = "Invalid input or unknown customer")
    )
)]
pub async fn create_rented_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    AppJson(book): AppJson<CreateRentedBook>,
) -> AppResult<Json<RentedBook>> {
    book.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.rented_books.create(book).await?;
    Ok(Json(created))
}

/// Update an existing rented book
#[utoipa::path(
    put,
    path = "/rented_books/{id}",
    tag = "rented_books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Rented book ID")
    ),
    request_body = UpdateRentedBook,
    responses(
        (status = 200, description = "Rented book updated", body = RentedBook),
        (status = 400, description = "Unknown customer"),
        (status = 404, description = "Rented book not found")
    )
)]
pub async fn update_rented_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(changes): AppJson<UpdateRentedBook>,
) -> AppResult<Json<RentedBook>> {
    let updated = state.services.rented_books.update(id, changes).await?;
    Ok(Json(updated))
}

/// Delete a rented book
#[utoipa::path(
    delete,
    path = "/rented_books/{id}",
    tag = "rented_books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Rented book ID")
    ),
    responses(
        (status = 200, description = "Rented book deleted", body = MessageResponse),
        (status = 404, description = "Rented book not found")
    )
)]
pub async fn delete_rented_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.rented_books.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Rented book deleted".to_string(),
    }))
}
