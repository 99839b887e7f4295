use clipshelf_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env if present, then configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    clipshelf_api::telemetry::init_tracing();

    // Initialize the application (library, thumbnailer, routes)
    let (_state, router) = clipshelf_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    clipshelf_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
