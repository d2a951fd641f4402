use mimalloc::MiMalloc;
use portfolio_api::{Config, PortfolioState, PortfolioStorage, portfolio_router};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const ROUTES: &[&str] = &[
    "POST   /api/auth/login         - Login with password",
    "GET    /api/personal           - Get personal info",
    "POST   /api/projects           - Create project",
    "GET    /api/projects           - Get all projects",
    "PUT    /api/projects/{id}      - Update project",
    "DELETE /api/projects/{id}      - Delete project",
    "GET    /api/skills             - Get all skills",
    "POST   /api/skills             - Create skill",
    "PUT    /api/experience/{id}    - Update experience",
    "GET    /api/social             - Get social links",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        frontend_url = %cfg.frontend_url,
        loglevel = %cfg.loglevel
    );

    // Schema must exist before any route is reachable.
    let storage = match PortfolioStorage::connect(&cfg.database_url).await {
        Ok(storage) => storage,
        Err(e) => {
            error!(error = %e, "database initialization failed");
            std::process::exit(1);
        }
    };
    if let Err(e) = storage.init_schema().await {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }
    info!("connected to SQLite database");

    let state = PortfolioState::new(storage, &cfg);
    let app = portfolio_router(state, &cfg.frontend_url);

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    for route in ROUTES {
        info!("  {route}");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
