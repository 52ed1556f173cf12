use axum::http::StatusCode;
use axum::{
    Extension, Json, Router,
    routing::{delete, get, post},
};
use spam_detector::auth::handlers::{handle_login, handle_register};
use spam_detector::auth::tokens::TokenStore;
use spam_detector::contacts::handlers::{
    handle_bulk_create_contacts, handle_create_contact, handle_delete_contact,
    handle_list_contacts,
};
use spam_detector::search::handlers::{handle_search_by_name, handle_search_by_phone};
use spam_detector::spam::handlers::{handle_list_reports, handle_report_spam};
use spam_detector::storage::memory::{ContactStore, SpamReportStore, UserStore};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. State layer:
    let users = Arc::new(UserStore::new());
    let contacts = Arc::new(ContactStore::new());
    let reports = Arc::new(SpamReportStore::new());
    let tokens = Arc::new(TokenStore::new());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_welcome))
        .route("/auth/register", post(handle_register))
        .route("/auth/login", post(handle_login))
        .route("/contacts", get(handle_list_contacts).post(handle_create_contact))
        .route("/contacts/bulk", post(handle_bulk_create_contacts))
        .route("/contacts/:id", delete(handle_delete_contact))
        .route("/spam-reports", get(handle_list_reports).post(handle_report_spam))
        .route("/search", get(handle_search_by_name))
        .route("/search/phone", get(handle_search_by_phone))
        .layer(Extension(users.clone()))
        .layer(Extension(contacts.clone()))
        .layer(Extension(reports.clone()))
        .layer(Extension(tokens.clone()));

    // 3. Spawn stats reporter:
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));

        loop {
            interval.tick().await;
            tracing::info!(
                "Store stats: {} users, {} contacts, {} spam reports, {} live tokens",
                users.count(),
                contacts.count(),
                reports.count(),
                tokens.count()
            );
        }
    });

    // 4. Start HTTP server:
    tracing::info!("Spam detector listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_welcome() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Welcome to Spam Detector API",
            "endpoints": {
                "register": "/auth/register",
                "login": "/auth/login",
                "contacts": "/contacts",
                "bulk_contacts": "/contacts/bulk",
                "spam_reports": "/spam-reports",
                "search_by_name": "/search?q=<name>",
                "search_by_phone": "/search/phone?q=<phone>"
            }
        })),
    )
}
