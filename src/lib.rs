pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;

pub use client::ChatRequestClient;
pub use error::{AppError, ChatError};

use tokio::net::TcpListener;

use crate::state::SharedState;

/// Run the chat service on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: SharedState) -> std::io::Result<()> {
    let app = routes::create_router().with_state(state);
    axum::serve(listener, app).await
}
