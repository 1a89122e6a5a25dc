use vibe_server::{Config, Server, ServerState, init_logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();

    tracing::info!("Vibe Bistro server starting...");

    // 2. Initialize server state (database pool, schema, seed fixtures)
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
