use pizzeria_restaurant_service::models as store;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantSummary {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Street address of the restaurant
    pub address: String,
}

impl From<store::Restaurant> for RestaurantSummary {
    fn from(r: store::Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaSummary {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Comma separated ingredient list
    pub ingredients: String,
}

impl From<store::Pizza> for PizzaSummary {
    fn from(p: store::Pizza) -> Self {
        Self {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

// Whole prices go out as JSON integers, fractional ones as floats.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Pizzas this restaurant sells, with their prices
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl From<store::RestaurantDetails> for Restaurant {
    fn from(details: store::RestaurantDetails) -> Self {
        Self {
            id: details.restaurant.id,
            name: details.restaurant.name,
            address: details.restaurant.address,
            restaurant_pizzas: details
                .restaurant_pizzas
                .into_iter()
                .map(|(rp, pizza)| RestaurantPizzaEntry {
                    id: rp.id,
                    price: rp.price,
                    pizza_id: rp.pizza_id,
                    restaurant_id: rp.restaurant_id,
                    pizza: pizza.into(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Pizza being priced
    pub pizza_id: i32,
    /// Restaurant selling the pizza
    pub restaurant_id: i32,
    /// Price between 1 and 30 inclusive; may be fractional
    pub price: f64,
}

impl From<CreateRestaurantPizzaRequest> for store::NewRestaurantPizza {
    fn from(req: CreateRestaurantPizzaRequest) -> Self {
        Self {
            price: req.price,
            restaurant_id: req.restaurant_id,
            pizza_id: req.pizza_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub restaurant: RestaurantSummary,
    pub pizza: PizzaSummary,
}

impl From<store::RestaurantPizzaDetails> for RestaurantPizzaResponse {
    fn from(details: store::RestaurantPizzaDetails) -> Self {
        let rp = details.restaurant_pizza;
        Self {
            id: rp.id,
            restaurant_id: rp.restaurant_id,
            pizza_id: rp.pizza_id,
            price: rp.price,
            restaurant: details.restaurant.into(),
            pizza: details.pizza.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always `["validation errors"]`
    pub errors: Vec<String>,
}
