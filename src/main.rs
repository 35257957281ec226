use anyhow::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use socialnet_schema::config::Config;
use socialnet_schema::db::Database;
use socialnet_schema::diagram;
use socialnet_schema::registry::SchemaRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,socialnet_schema=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Initialized configuration");

    // Construct the schema registry
    let registry = SchemaRegistry::social_media();
    info!(
        entities = registry.len(),
        relationships = registry.relationships().len(),
        "Constructed schema registry"
    );

    // Hand the schema to the database engine when one is configured
    if config.database.url.is_some() {
        Database::connect(&config.database).await?;
        info!("Schema applied to the configured database");
    }

    // Render the ER diagram
    match diagram::render_with(
        &config.diagram.renderer,
        &registry,
        &config.diagram.output_path,
    ) {
        Ok(rendered) => {
            println!("Success! Check the {} file", rendered.path.display());
            Ok(())
        }
        Err(e) => {
            println!("There was a problem generating the diagram");
            error!("Diagram generation failed: {}", e);
            Err(e.into())
        }
    }
}
