use std::{net::SocketAddr, time::Duration};

use rusqlite::Connection;
use tokio::net::TcpListener;

use crate::{AppState, build_router, dashboard::ApiClient};

/// Serve the REST API over an in-memory database on a random local port and
/// return a client for it.
///
/// The server task lives until the test's runtime shuts down.
pub(crate) async fn spawn_api(seed_samples: bool) -> ApiClient {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    let state = AppState::new(connection, seed_samples)
        .expect("Could not create app state.");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener.");
    let address = listener.local_addr().expect("Could not get local address.");

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("Test API server failed.");
    });

    client_for(address)
}

/// Return a client pointed at a local port with nothing listening on it.
pub(crate) async fn unreachable_api() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener.");
    let address = listener.local_addr().expect("Could not get local address.");
    drop(listener);

    client_for(address)
}

fn client_for(address: SocketAddr) -> ApiClient {
    ApiClient::new(&format!("http://{address}/api"), Duration::from_secs(5))
        .expect("Could not create API client.")
}
