use axum::Json;
use serde_json::{Value, json};

pub const WELCOME_MESSAGE: &str = "Bienvenue sur l'API Ecole";

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}
