use diesel::prelude::*;

use crate::error::StoreError;
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

/// Lowest price a restaurant may charge for a pizza.
pub const MIN_PRICE: f64 = 1.0;
/// Highest price a restaurant may charge for a pizza.
pub const MAX_PRICE: f64 = 30.0;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = pizzas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = pizzas)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(belongs_to(Pizza))]
#[diesel(table_name = restaurant_pizzas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurant_pizzas)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

/// A restaurant together with every pizza it sells.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetails {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<(RestaurantPizza, Pizza)>,
}

/// A freshly created association joined with both of its ends.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPizzaDetails {
    pub restaurant_pizza: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}

/// Checks that `price` lies in `MIN_PRICE..=MAX_PRICE`. Fractional prices are
/// allowed.
pub fn validate_price(price: f64) -> Result<f64, StoreError> {
    if (MIN_PRICE..=MAX_PRICE).contains(&price) {
        Ok(price)
    } else {
        Err(StoreError::Validation(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}, got {price}"
        )))
    }
}
