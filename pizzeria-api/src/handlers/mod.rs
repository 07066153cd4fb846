pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use std::sync::Arc;

use axum::{Router, response::Html, response::Json, routing::get};
use pizzeria_restaurant_service::{PizzeriaRepository, StoreError};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PizzeriaRepository>,
}

impl AppState {
    pub fn new(repo: impl PizzeriaRepository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Runs `f` against the repository on the blocking thread pool.
    pub async fn with_repo<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn PizzeriaRepository) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        let result = tokio::task::spawn_blocking(move || f(repo.as_ref()))
            .await
            .map_err(|e| ApiError::InternalError(format!("Repository task failed: {e}")))?;
        Ok(result?)
    }
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api-docs/openapi.json", get(openapi))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::models::RestaurantSummary,
            crate::models::Restaurant,
            crate::models::RestaurantPizzaEntry,
            crate::models::PizzaSummary,
            crate::models::CreateRestaurantPizzaRequest,
            crate::models::RestaurantPizzaResponse,
            crate::models::ApiErrorResponse,
            crate::models::ValidationErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant pizza pricing endpoints")
    ),
    info(
        title = "Pizzeria API",
        description = "Restaurants, pizzas and the prices restaurants charge for them",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
