use minik_core::{
    constants::{MAX_NOTES_LENGTH_ENV, MAX_STRING_LENGTH_ENV},
    Validator, ValidatorConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the Minik validation service
///
/// Loads `.env`, resolves validator limits once and serves the REST API.
///
/// # Environment Variables
/// - `MINIK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MINIK_MAX_STRING_LENGTH`: default free-text limit (default: 255)
/// - `MINIK_MAX_NOTES_LENGTH`: activity notes limit (default: 1000)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("minik=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = ValidatorConfig::from_env_values(
        std::env::var(MAX_STRING_LENGTH_ENV).ok(),
        std::env::var(MAX_NOTES_LENGTH_ENV).ok(),
    )?;
    let rest_addr = std::env::var("MINIK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let validator = Validator::new(cfg);

    tracing::info!(
        max_string_length = validator.config().max_string_length(),
        max_notes_length = validator.config().max_notes_length(),
        "++ Starting Minik REST on {}",
        rest_addr
    );

    let app = router(AppState::new(validator));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
