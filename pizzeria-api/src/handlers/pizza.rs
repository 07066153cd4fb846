use axum::{Router, extract::State, response::Json, routing::get};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::PizzaSummary;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaSummary]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let pizzas = state.with_repo(|repo| repo.list_pizzas()).await?;
    Ok(Json(pizzas.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::test_support::TestApp;

    #[tokio::test]
    async fn test_list_pizzas_empty() {
        let app = TestApp::new();
        let (status, body) = app.get_json("/pizzas").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_pizzas() {
        let app = TestApp::new();
        let emma = app.pizza("Emma", "Dough, Tomato Sauce, Cheese");
        let melanie = app.pizza("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard");

        let (status, body) = app.get_json("/pizzas").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": emma.id, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"},
                {
                    "id": melanie.id,
                    "name": "Melanie",
                    "ingredients": "Dough, Sauce, Ricotta, Red peppers, Mustard",
                },
            ])
        );
    }
}
