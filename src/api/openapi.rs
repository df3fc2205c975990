//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, customers, health, rented_books};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Rental API",
        version = "0.1.0",
        description = "Book Rental Management REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        // Customers
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        // Rented books
        rented_books::list_rented_books,
        rented_books::get_rented_book,
        rented_books::create_rented_book,
        rented_books::update_rented_book,
        rented_books::delete_rented_book,
    ),
    components(
        schemas(
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            // Customers
            crate::models::customer::Customer,
            crate::models::customer::CreateCustomer,
            crate::models::customer::UpdateCustomer,
            // Rented books
            crate::models::rented_book::RentedBook,
            crate::models::rented_book::CreateRentedBook,
            crate::models::rented_book::UpdateRentedBook,
            // Health
            health::HealthResponse,
            // Envelopes
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "customers", description = "Customer management"),
        (name = "rented_books", description = "Rented book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
