use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

use axum::middleware;
use axum_server::Handle;
use clap::Parser;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use expense_tracker::{
    ApiClient, DashboardState, add_tracing_layer, build_dashboard_router, graceful_shutdown,
    init_tracing, logging_middleware,
};

/// The web dashboard for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the expense tracker REST API.
    #[arg(
        long,
        env = "EXPENSE_TRACKER_API_URL",
        default_value = "http://localhost:8000/api"
    )]
    api_url: String,

    /// The address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 8501)]
    port: u16,

    /// The canonical timezone used for the default date on the form, e.g. "Pacific/Auckland".
    #[arg(long, env = "EXPENSE_TRACKER_TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,

    /// How many seconds to wait for the API before giving up on a request.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// File path for the debug log.
    #[arg(long, default_value = "dashboard.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = init_tracing(&args.log_path) {
        eprintln!("Could not open log file {}: {error}", args.log_path.display());
        return ExitCode::FAILURE;
    }

    let api = match ApiClient::new(&args.api_url, Duration::from_secs(args.timeout_secs)) {
        Ok(api) => api,
        Err(error) => {
            tracing::error!("Could not create API client: {error}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Using the API at {}", api.base_url());
    let state = DashboardState::new(api, &args.timezone);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_dashboard_router(state))
        .layer(middleware::from_fn(logging_middleware));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("Dashboard listening on http://{}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
