use tracing::info;

use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::{PizzeriaRepository, StoreError};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price) into the tables above.
const PRICES: &[(usize, usize, f64)] = &[(0, 0, 1.0), (1, 1, 4.0), (2, 2, 5.0)];

/// Fills an empty store with sample data. Returns `false` when the store
/// already holds restaurants and nothing was written.
pub fn seed(repo: &dyn PizzeriaRepository) -> Result<bool, StoreError> {
    if !repo.list_restaurants()?.is_empty() {
        info!("restaurants already present, skipping seed");
        return Ok(false);
    }

    let restaurants = RESTAURANTS
        .iter()
        .map(|(name, address)| {
            repo.create_restaurant(NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pizzas = PIZZAS
        .iter()
        .map(|(name, ingredients)| {
            repo.create_pizza(NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for &(restaurant, pizza, price) in PRICES {
        repo.create_restaurant_pizza(NewRestaurantPizza {
            price,
            restaurant_id: restaurants[restaurant].id,
            pizza_id: pizzas[pizza].id,
        })?;
    }

    info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        restaurant_pizzas = PRICES.len(),
        "seeded database"
    );
    Ok(true)
}
