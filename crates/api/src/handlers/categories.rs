//! Handler for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use kwaground_db::models::category::Category;
use kwaground_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// The seeded category set, in seed order.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}
