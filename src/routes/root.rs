use axum::Json;
use serde_json::{json, Value};

pub async fn handler() -> Json<Value> {
    Json(json!({ "usage": "/api/number?num=92XXXXXXXXXX&key=YOUR_KEY" }))
}
