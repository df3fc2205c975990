//! Rented book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Rented book record. A present `return_date` means the book came back;
/// absence means it is still on loan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RentedBook {
    pub id: i32,
    pub title: String,
    pub rent_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub customer_id: i32,
}

/// Create rented book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRentedBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub rent_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub customer_id: i32,
}

/// Update rented book request (partial)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateRentedBook {
    pub title: Option<String>,
    pub rent_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub customer_id: Option<i32>,
}

impl UpdateRentedBook {
    /// Drop fields without a usable value: empty titles, a zero customer id,
    /// and absent dates all mean "leave the stored value unchanged". This
    /// also means a set `return_date` cannot be cleared through update.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.filter(|s| !s.is_empty()),
            rent_date: self.rent_date,
            return_date: self.return_date,
            customer_id: self.customer_id.filter(|id| *id != 0),
        }
    }
}
