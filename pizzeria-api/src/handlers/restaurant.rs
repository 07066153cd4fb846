use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Json,
    routing::get,
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

// Ids that are not integers cannot name a restaurant.
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::RestaurantNotFound)
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [RestaurantSummary]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = state.with_repo(|repo| repo.list_restaurants()).await?;
    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant details", body = Restaurant),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Restaurant>, ApiError> {
    let id = restaurant_id(path)?;
    let details = state
        .with_repo(move |repo| repo.get_restaurant(id))
        .await?;
    Ok(Json(details.into()))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = restaurant_id(path)?;
    state
        .with_repo(move |repo| repo.delete_restaurant(id))
        .await?;
    info!(restaurant_id = id, "restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use pizzeria_restaurant_service::{PizzeriaRepository, models::NewRestaurantPizza};
    use serde_json::json;

    use crate::handlers::test_support::TestApp;

    #[tokio::test]
    async fn test_list_restaurants() {
        let app = TestApp::new();
        let first = app.restaurant("Karen's Pizza Shack", "address1");
        let second = app.restaurant("Sanjay's Pizza", "address2");

        let (status, body) = app.get_json("/restaurants").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": first.id, "name": "Karen's Pizza Shack", "address": "address1"},
                {"id": second.id, "name": "Sanjay's Pizza", "address": "address2"},
            ])
        );
    }

    #[tokio::test]
    async fn test_get_restaurant_without_pizzas() {
        let app = TestApp::new();
        let restaurant = app.restaurant("Kiki's Pizza", "address3");

        let (status, body) = app
            .get_json(&format!("/restaurants/{}", restaurant.id))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": restaurant.id,
                "name": "Kiki's Pizza",
                "address": "address3",
                "restaurant_pizzas": [],
            })
        );
    }

    #[tokio::test]
    async fn test_get_restaurant_with_pizzas() {
        let app = TestApp::new();
        let restaurant = app.restaurant("Kiki's Pizza", "address3");
        let pizza = app.pizza("Emma", "Dough, Tomato Sauce, Cheese");
        let created = app
            .repo
            .create_restaurant_pizza(NewRestaurantPizza {
                price: 9.0,
                restaurant_id: restaurant.id,
                pizza_id: pizza.id,
            })
            .unwrap();

        let (status, body) = app
            .get_json(&format!("/restaurants/{}", restaurant.id))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["restaurant_pizzas"],
            json!([{
                "id": created.restaurant_pizza.id,
                "price": 9,
                "pizza_id": pizza.id,
                "restaurant_id": restaurant.id,
                "pizza": {
                    "id": pizza.id,
                    "name": "Emma",
                    "ingredients": "Dough, Tomato Sauce, Cheese",
                },
            }])
        );
    }

    #[tokio::test]
    async fn test_get_restaurant_not_found() {
        let app = TestApp::new();

        let (status, body) = app.get_json("/restaurants/9999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Restaurant not found"}));

        let (status, body) = app.get_json("/restaurants/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn test_delete_restaurant() {
        let app = TestApp::new();
        let doomed = app.restaurant("Karen's Pizza Shack", "address1");
        let kept = app.restaurant("Sanjay's Pizza", "address2");
        let pizza = app.pizza("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni");
        app.repo
            .create_restaurant_pizza(NewRestaurantPizza {
                price: 4.0,
                restaurant_id: doomed.id,
                pizza_id: pizza.id,
            })
            .unwrap();

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/restaurants/{}", doomed.id))
            .body(Body::empty())
            .unwrap();
        let (status, body) = app.send(req).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (_, listing) = app.get_json("/restaurants").await;
        assert_eq!(
            listing,
            json!([{"id": kept.id, "name": "Sanjay's Pizza", "address": "address2"}])
        );
        let (status, _) = app.get_json(&format!("/restaurants/{}", doomed.id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_restaurant_not_found() {
        let app = TestApp::new();
        let req = Request::builder()
            .method("DELETE")
            .uri("/restaurants/9999")
            .body(Body::empty())
            .unwrap();
        let (status, body) = app.send(req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
            json!({"error": "Restaurant not found"})
        );
    }
}
