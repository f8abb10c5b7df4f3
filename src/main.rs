use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod seed;
mod stats;

use crate::config::Config;
use crate::db::{PgProductStore, ProductStore};

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

#[derive(Debug, Parser)]
#[command(name = "inventory-service", about = "Inventory tracking REST backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
    /// Insert random demo products
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Apply pending migrations before accepting traffic
    #[arg(long)]
    migrate: bool,
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// Number of products to insert
    #[arg(long, default_value_t = seed::DEFAULT_SEED_COUNT)]
    count: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,inventory_service=debug"))
                .context("invalid log filter")?,
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Commands::Migrate => db::run_migrations(&pool).await?,
        Commands::Seed(args) => {
            let store = PgProductStore::new(pool);
            let mut rng = StdRng::from_entropy();
            let products = seed::seed_products(&store, args.count, &mut rng).await?;
            info!(seeded = products.len(), "Seed finished");
        }
        Commands::Serve(args) => {
            if args.migrate {
                db::run_migrations(&pool).await?;
            }

            let state = AppState {
                store: Arc::new(PgProductStore::new(pool)),
            };
            let app = build_router(state);

            let addr = config.bind_addr();
            info!("Listening on http://{}", addr);

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Liveness ────────────────────────────────────────────────────────
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── Stats ───────────────────────────────────────────────────────────
        .route("/api/stats", get(handlers::stats::get_stats))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
