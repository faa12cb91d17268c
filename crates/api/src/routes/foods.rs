//! Catalog route handlers.
//!
//! Create and update take a multipart form so the image arrives as raw
//! bytes; the upload is normalized through the image pipeline before the
//! catalog service ever sees it. The original upload is discarded after
//! normalization.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};

use ladle_core::FoodId;

use crate::error::AppError;
use crate::models::Food;
use crate::routes::ApiResponse;
use crate::services::{CatalogService, image};
use crate::state::AppState;

/// Fields extracted from the create/update multipart form.
struct FoodForm {
    name: String,
    price: String,
    description: Option<String>,
    image: Vec<u8>,
}

impl FoodForm {
    /// Drain `multipart` into the expected fields.
    ///
    /// Unknown fields are ignored; missing required fields are a
    /// validation error using the catalog's canonical message.
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut name = None;
        let mut price = None;
        let mut description = None;
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            // The name borrows the field; take a copy before consuming it.
            let field_name = field.name().map(ToOwned::to_owned);
            match field_name.as_deref() {
                Some("name") => name = Some(field.text().await?),
                Some("price") => price = Some(field.text().await?),
                Some("description") => description = Some(field.text().await?),
                Some("image") => image = Some(field.bytes().await?.to_vec()),
                _ => {}
            }
        }

        // A zero-byte image part counts as absent, same as no part at all.
        match (name, price, image) {
            (Some(name), Some(price), Some(image)) if !image.is_empty() => Ok(Self {
                name,
                price,
                description,
                image,
            }),
            _ => Err(AppError::Validation(
                "Name, price, and image are required".to_owned(),
            )),
        }
    }
}

/// Parse a path segment as a food id.
///
/// An id that is not even well-formed cannot belong to any food, so it
/// reports the same way as an absent one.
fn parse_id(id: &str) -> Result<FoodId, AppError> {
    id.parse().map_err(|_| AppError::food_not_found())
}

/// GET /food - all foods, most recent first.
///
/// # Errors
///
/// 500 if the store is unavailable.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Food>>>, AppError> {
    let foods = CatalogService::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::data(foods)))
}

/// GET /food/{id} - a single food.
///
/// # Errors
///
/// 404 if no food has that id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Food>>, AppError> {
    let food = CatalogService::new(state.pool())
        .get(parse_id(&id)?)
        .await?;
    Ok(Json(ApiResponse::data(food)))
}

/// POST /food - add a food from a multipart form.
///
/// # Errors
///
/// 400 on missing/invalid fields, 413 on an oversized upload, 422 on an
/// undecodable image.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Food>>), AppError> {
    let form = FoodForm::from_multipart(multipart).await?;
    let embedded = image::normalize(&form.image)?;

    let food = CatalogService::new(state.pool())
        .create(&form.name, &form.price, embedded, form.description)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Food item added successfully", food)),
    ))
}

/// PUT /food/{id} - full replace from the same multipart form as POST.
///
/// # Errors
///
/// Same as create, plus 404 if no food has that id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<Food>>, AppError> {
    let id = parse_id(&id)?;
    let form = FoodForm::from_multipart(multipart).await?;
    let embedded = image::normalize(&form.image)?;

    let food = CatalogService::new(state.pool())
        .update(id, &form.name, &form.price, embedded, form.description)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Food item updated successfully",
        food,
    )))
}

/// DELETE /food/{id} - remove a food. Confirmation only, no payload.
///
/// # Errors
///
/// 404 if no food has that id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    CatalogService::new(state.pool())
        .delete(parse_id(&id)?)
        .await?;

    Ok(Json(ApiResponse::message("Food item deleted successfully")))
}
