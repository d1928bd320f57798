use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::account::ports::AuthServicePort;
use account_service::domain::account::service::AuthService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::hasher::Argon2CredentialHasher;
use account_service::outbound::repositories::PostgresUserRepository;
use auth::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let hasher = Arc::new(Argon2CredentialHasher::new());
    let token_issuer = TokenIssuer::new(config.jwt.secret.as_bytes());

    let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
        repository,
        hasher,
        token_issuer,
        config.jwt.expiration_hours,
    ));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(listener, create_router(auth_service)).await?;

    Ok(())
}
