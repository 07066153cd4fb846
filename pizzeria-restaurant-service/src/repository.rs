use diesel::{delete, insert_into, prelude::*};
use tracing::debug;

use crate::error::StoreError;
use crate::models::{
    self, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantDetails,
    RestaurantPizza, RestaurantPizzaDetails,
};
use crate::{establish_connection, schema};

/// Persistence operations the HTTP layer depends on.
pub trait PizzeriaRepository: Send + Sync {
    fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError>;

    /// Returns [`StoreError::NotFound`] for an unknown id.
    fn get_restaurant(&self, restaurant_id: i32) -> Result<RestaurantDetails, StoreError>;

    /// Removes the restaurant along with its price associations.
    fn delete_restaurant(&self, restaurant_id: i32) -> Result<(), StoreError>;

    fn list_pizzas(&self) -> Result<Vec<Pizza>, StoreError>;

    /// Fails with [`StoreError::Validation`] when either side of the
    /// association is missing or the price is out of range.
    fn create_restaurant_pizza(
        &self,
        new_restaurant_pizza: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetails, StoreError>;

    fn create_restaurant(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, StoreError>;

    fn create_pizza(&self, new_pizza: NewPizza) -> Result<Pizza, StoreError>;
}

/// SQLite-backed repository opening one connection per call.
#[derive(Debug, Clone)]
pub struct DieselRepository {
    database_url: String,
}

impl DieselRepository {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        establish_connection(&self.database_url)
    }
}

impl PizzeriaRepository for DieselRepository {
    fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        use schema::restaurants::dsl::*;

        let conn = &mut self.connection()?;
        let results = restaurants
            .order(id.asc())
            .select(Restaurant::as_select())
            .load(conn)?;
        Ok(results)
    }

    fn get_restaurant(&self, restaurant_id: i32) -> Result<RestaurantDetails, StoreError> {
        use schema::restaurants::dsl::*;

        let conn = &mut self.connection()?;
        let restaurant = restaurants
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first(conn)?;

        let restaurant_pizzas = RestaurantPizza::belonging_to(&restaurant)
            .inner_join(schema::pizzas::table)
            .order(schema::restaurant_pizzas::id.asc())
            .select((RestaurantPizza::as_select(), Pizza::as_select()))
            .load::<(RestaurantPizza, Pizza)>(conn)?;

        Ok(RestaurantDetails {
            restaurant,
            restaurant_pizzas,
        })
    }

    fn delete_restaurant(&self, restaurant_id: i32) -> Result<(), StoreError> {
        let conn = &mut self.connection()?;
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            let removed = delete(
                schema::restaurant_pizzas::table
                    .filter(schema::restaurant_pizzas::restaurant_id.eq(restaurant_id)),
            )
            .execute(conn)?;

            let deleted = delete(schema::restaurants::table.find(restaurant_id)).execute(conn)?;
            if deleted == 0 {
                return Err(StoreError::NotFound);
            }

            debug!(restaurant_id, removed, "deleted restaurant and its pizzas");
            Ok(())
        })
    }

    fn list_pizzas(&self) -> Result<Vec<Pizza>, StoreError> {
        use schema::pizzas::dsl::*;

        let conn = &mut self.connection()?;
        let results = pizzas
            .order(id.asc())
            .select(Pizza::as_select())
            .load(conn)?;
        Ok(results)
    }

    fn create_restaurant_pizza(
        &self,
        new_restaurant_pizza: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetails, StoreError> {
        let conn = &mut self.connection()?;
        conn.immediate_transaction::<_, StoreError, _>(|conn| {
            let restaurant = schema::restaurants::table
                .find(new_restaurant_pizza.restaurant_id)
                .select(Restaurant::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| {
                    StoreError::Validation(format!(
                        "restaurant {} does not exist",
                        new_restaurant_pizza.restaurant_id
                    ))
                })?;

            let pizza = schema::pizzas::table
                .find(new_restaurant_pizza.pizza_id)
                .select(Pizza::as_select())
                .first(conn)
                .optional()?
                .ok_or_else(|| {
                    StoreError::Validation(format!(
                        "pizza {} does not exist",
                        new_restaurant_pizza.pizza_id
                    ))
                })?;

            models::validate_price(new_restaurant_pizza.price)?;

            let restaurant_pizza = insert_into(schema::restaurant_pizzas::table)
                .values(&new_restaurant_pizza)
                .returning(RestaurantPizza::as_returning())
                .get_result(conn)?;

            Ok(RestaurantPizzaDetails {
                restaurant_pizza,
                restaurant,
                pizza,
            })
        })
    }

    fn create_restaurant(&self, new_restaurant: NewRestaurant) -> Result<Restaurant, StoreError> {
        let conn = &mut self.connection()?;
        let restaurant = insert_into(schema::restaurants::table)
            .values(&new_restaurant)
            .returning(Restaurant::as_returning())
            .get_result(conn)?;
        Ok(restaurant)
    }

    fn create_pizza(&self, new_pizza: NewPizza) -> Result<Pizza, StoreError> {
        let conn = &mut self.connection()?;
        let pizza = insert_into(schema::pizzas::table)
            .values(&new_pizza)
            .returning(Pizza::as_returning())
            .get_result(conn)?;
        Ok(pizza)
    }
}
