mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::clearance::{routes as clearance_routes, ClearanceService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::home::routes as home_routes;
use crate::features::payments::{routes as payments_routes, PaymentService};
use crate::features::reports::{routes as reports_routes, ReportService};
use crate::features::students::{routes as students_routes, StudentService};
use crate::modules::storage::LetterStore;
use axum::Router;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// SPP administration tracker
#[derive(Debug, Parser)]
#[command(name = "spp-tracker", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve,
    /// Create the database file, apply the schema and seed sample data
    Setup,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli, worker_threads))
}

async fn async_main(cli: Cli, worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Setup => setup(&config).await,
        Commands::Serve => serve(config, worker_threads).await,
    }
}

async fn setup(config: &Config) -> anyhow::Result<()> {
    let pool = database::create_pool_for_setup(&config.database).await?;
    tracing::info!("Database opened: {}", config.database.url);

    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    database::seed_sample_data(&pool).await?;
    tracing::info!("Sample advisor and student seeded");

    pool.close().await;
    Ok(())
}

async fn serve(config: Config, worker_threads: usize) -> anyhow::Result<()> {
    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    if let Some(path) = config.database.file_path() {
        if !path.exists() {
            anyhow::bail!(
                "Database file {} not found. Run `spp-tracker setup` first.",
                path.display()
            );
        }
    }

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    let student_service = Arc::new(StudentService::new(pool.clone()));
    let payment_service = Arc::new(PaymentService::new(
        pool.clone(),
        Arc::clone(&student_service),
        config.payments.clone(),
    ));

    let letter_store = Arc::new(LetterStore::new(config.letters.output_dir.clone()));
    tracing::info!(
        "Letter store initialized at {}",
        letter_store.output_dir().display()
    );
    let clearance_service = Arc::new(ClearanceService::new(
        Arc::clone(&student_service),
        letter_store,
        config.letters.clone(),
        config.payments.require_payment_for_activation,
    ));
    if config.payments.require_payment_for_activation {
        tracing::info!("Activation requires a lunas payment");
    }

    let dashboard_service = Arc::new(DashboardService::new(pool.clone()));
    let report_service = Arc::new(ReportService::new(pool.clone()));
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", axum::routing::get(health_check))
        .merge(home_routes::routes())
        .merge(students_routes::routes(student_service))
        .merge(payments_routes::routes(payment_service))
        .merge(clearance_routes::routes(clearance_service))
        .merge(dashboard_routes::routes(dashboard_service))
        .merge(reports_routes::routes(report_service))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(
                    config.app.cors_allowed_origins.clone(),
                )),
        );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
