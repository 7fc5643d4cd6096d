use std::net::SocketAddr;

use leave_engine::api::{AppState, create_router};
use tracing::info;

use crate::cli::{AppError, ServeArgs};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let policy = args.roster.load_policy()?;
    let roster = args.roster.load_roster(&policy)?;
    let app = create_router(AppState::new(policy, roster));

    let host = args.host.as_deref().unwrap_or(DEFAULT_HOST);
    let port = args.port.unwrap_or(DEFAULT_PORT);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    info!(%addr, "leave engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
