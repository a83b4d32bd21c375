#![allow(dead_code)]

use mealdb_client::MealDbClient;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Client pointed at a mockito stub server.
pub fn client_for(server: &mockito::ServerGuard) -> MealDbClient {
    MealDbClient::new(server.url())
}

/// Minimal meal stub in the shape the filter endpoints return.
pub fn meal_stub(id: usize, name: &str) -> serde_json::Value {
    serde_json::json!({
        "idMeal": id.to_string(),
        "strMeal": name,
        "strMealThumb": format!("http://x/{}.jpg", id),
    })
}

/// `meals` envelope holding `count` sequentially numbered stubs.
pub fn meal_envelope(count: usize) -> String {
    let stubs: Vec<serde_json::Value> = (1..=count)
        .map(|i| meal_stub(i, &format!("Meal {}", i)))
        .collect();
    serde_json::json!({ "meals": stubs }).to_string()
}

/// Envelope whose payload key is JSON null, the service's shape for zero
/// matches.
pub fn null_envelope(key: &str) -> String {
    format!(r#"{{"{}":null}}"#, key)
}
