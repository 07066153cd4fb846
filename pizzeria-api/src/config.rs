use std::env;

use pizzeria_restaurant_service::database_url;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5555";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
}

impl Config {
    /// Reads `DATABASE_URL` and `BIND_ADDRESS`, falling back to local defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: database_url(),
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        }
    }
}
