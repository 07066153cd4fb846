use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::post,
};
use pizzeria_restaurant_service::models::NewRestaurantPizza;
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Restaurant pizza created", body = RestaurantPizzaResponse),
        (status = 400, description = "Validation errors", body = ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "rejected restaurant pizza payload");
        ApiError::ValidationFailed
    })?;

    let new_restaurant_pizza: NewRestaurantPizza = payload.into();
    let created = state
        .with_repo(move |repo| repo.create_restaurant_pizza(new_restaurant_pizza))
        .await?;
    info!(
        restaurant_pizza_id = created.restaurant_pizza.id,
        "restaurant pizza created"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}
