use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::Connection;
use crate::server::AppState;

pub async fn run(listen_addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, state).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let state = state.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, state);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
