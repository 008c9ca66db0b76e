use axum::{Json, Router, routing::get};
use inventory_core::ApiUser;

pub const GREETING: &str = "Hello from Express API ";

pub fn router() -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/users", get(handle_users))
}

pub fn users() -> Vec<ApiUser> {
    vec![
        ApiUser {
            id: 1,
            name: "Dhanush".into(),
        },
        ApiUser {
            id: 2,
            name: "Allen".into(),
        },
    ]
}

async fn handle_root() -> Json<&'static str> {
    Json(GREETING)
}

async fn handle_users() -> Json<Vec<ApiUser>> {
    Json(users())
}
