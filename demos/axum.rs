/* demos/axum.rs */

use axum::{Router, extract::ConnectInfo, response::Json, routing::get};
use publicip::{ClientIp, ClientIpLayer, is_private_or_loopback_str, remote_ip};
use serde_json::json;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_app();
    let listener = match tokio::net::TcpListener::bind("0.0.0.0:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Failed to bind 0.0.0.0:3000: {}", err);
            return;
        }
    };

    println!("Server starting on http://localhost:3000");
    println!("Test endpoints:");
    println!("  • GET /        - resolved client IP with remote fallback");
    println!("  • GET /public  - public client IP only");
    println!("  • GET /debug   - headers and connection info");
    println!();
    println!("Test with headers:");
    println!("  curl -H 'X-Forwarded-For: 10.0.0.1, 198.51.100.1' http://localhost:3000/");
    println!("  curl -H 'X-Real-Ip: 203.0.113.42' http://localhost:3000/public");
    println!();

    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        eprintln!("Server error: {}", err);
    }
}

fn create_app() -> Router {
    let default_router = Router::new()
        .route("/", get(ip_handler))
        .route("/debug", get(debug_handler))
        .layer(ClientIpLayer::default());

    let public_router = Router::new()
        .route("/", get(ip_handler))
        .layer(ClientIpLayer::public_only());

    default_router.nest("/public", public_router)
}

/// Report the resolved IP and how it classifies.
async fn ip_handler(client_ip: ClientIp) -> Json<serde_json::Value> {
    let ip = client_ip.ip();

    Json(json!({
        "client_ip": ip,
        "known": !client_ip.is_unknown(),
        "is_private_or_loopback": is_private_or_loopback_str(ip),
    }))
}

async fn debug_handler(
    client_ip: ClientIp,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: axum::extract::Request,
) -> Json<serde_json::Value> {
    let header = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    Json(json!({
        "client_ip": client_ip.ip(),
        "x_forwarded_for": header("x-forwarded-for"),
        "x_real_ip": header("x-real-ip"),
        "connection": {
            "remote_addr": addr.to_string(),
            "remote_ip": remote_ip(&request),
        },
    }))
}
