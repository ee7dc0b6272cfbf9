use posts_api::{app, states::AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    // Create application state
    let state = AppState::new();

    let router = app(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health       - Health check");
    info!("  GET    /posts        - List all posts");
    info!("  POST   /posts        - Create post");
    info!("  GET    /posts/:id    - Get specific post");
    info!("  PUT    /posts/:id    - Update post");
    info!("  DELETE /posts/:id    - Delete post");

    axum::serve(listener, router).await.unwrap();
}
