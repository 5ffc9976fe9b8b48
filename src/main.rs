mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod query;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use middleware::session::session_auth;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Dealership Inventory API");
    info!("===========================");

    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Database connection failed: {}", e);
            return Err(e);
        }
    };

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_addr().parse()?;
    let app_state = AppState::new(pool, config);

    // Everything except login requires a live session
    let protected = Router::new()
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/customers", routes::customer_routes::create_customer_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            session_auth,
        ));

    // Development stays permissive; elsewhere only configured origins pass
    let cors = if app_state.config.is_development() || app_state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state);

    info!("🌐 Server starting on http://{}", addr);
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Log in, returns a session token");
    info!("   POST /api/auth/logout - Log out");
    info!("🚙 Vehicles:");
    info!("   GET  /api/vehicles - Inventory scoped by role (filterable)");
    info!("   GET  /api/vehicles/all - Every vehicle (owners)");
    info!("   GET  /api/vehicles/filter-options - Values for filter controls");
    info!("   GET  /api/vehicles/:id - Detail with parts, parties, eligibility");
    info!("   POST /api/vehicles/parts/:part_id/install - Mark part installed");
    info!("👤 Customers:");
    info!("   GET  /api/customers - Customer pick list");
    info!("   POST /api/customers - Create customer");
    info!("📊 Reports (owners):");
    info!("   GET  /api/reports/sales - Salesperson performance");
    info!("   GET  /api/reports/sellers - Seller payouts");
    info!("   GET  /api/reports/vendors - Vendor part spend");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Liveness endpoint
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dealership-inventory",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Graceful shutdown on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
