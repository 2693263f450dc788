use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use chirp_api::{AppState, AppStateInner, accounts, messages};
use chirp_db::Database;
use chirp_service::{AccountService, MessageService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirp=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("CHIRP_DB_PATH").unwrap_or_else(|_| "chirp.db".into());
    let host = std::env::var("CHIRP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("CHIRP_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;

    // Init database
    let db = Arc::new(Database::open(&PathBuf::from(&db_path))?);

    // Services are constructed once here and handed to handlers through
    // state; the message policy checks authors via the account policy.
    let account_service = AccountService::new(db.clone());
    let message_service = MessageService::new(db, account_service.clone());

    let state: AppState = Arc::new(AppStateInner {
        accounts: account_service,
        messages: message_service,
    });

    // Routes
    let app = Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/messages", post(messages::create).get(messages::get_all))
        .route(
            "/messages/{message_id}",
            get(messages::get_by_id)
                .delete(messages::delete)
                .patch(messages::update),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(accounts::messages_by_account),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("chirp server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
