use tokio::net::TcpListener;
use users_api::{api_routes, connect_with_retry, ensure_users_table, AppState, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("users_api=info")),
        )
        .init();

    let settings = Settings::from_env();

    // Connect and create the table before accepting any request that could
    // touch it. Exhausting the retry budget is the only fatal path.
    let pool = match &settings.db {
        Some(db) => match connect_with_retry(db).await {
            Ok(pool) => {
                ensure_users_table(&pool).await?;
                tracing::info!(db = %db.name, "store ready");
                Some(pool)
            }
            Err(err) => {
                tracing::error!(%err, "store unreachable after retry budget, giving up");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("no DB_* configuration, serving health routes only");
            None
        }
    };

    let state = AppState::new(pool, settings.db.clone());
    let app = api_routes(state);

    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    tracing::info!("Backend listening on http://127.0.0.1:{}", settings.port);
    axum::serve(listener, app).await?;
    Ok(())
}
