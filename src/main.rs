use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;

use pagestrip::config::Config;
use pagestrip::handlers;
use pagestrip::models::Catalog;
use pagestrip::Paginator;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    let server_address = config.server_address();

    let paginator = Paginator::try_new(config.pagination_options())
        .context("Invalid pagination settings")?;
    let catalog = Catalog::generate(config.demo_items);

    log::info!("Starting Pagestrip server...");
    log::info!(
        "Paginating {} items ({} per page by default, at most {}, strip of {})",
        catalog.count(),
        paginator.options().default_per_page,
        paginator.options().max_per_page,
        paginator.options().num_page_numbers
    );
    log::info!("Server starting on http://{server_address}");

    let paginator = web::Data::new(paginator);
    let catalog = web::Data::new(catalog);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(paginator.clone())
            .app_data(catalog.clone())
            .route("/", web::get().to(handlers::list_items))
            .route("/items", web::get().to(handlers::list_items))
            .route("/api/items", web::get().to(handlers::api_items))
    })
    .bind(&server_address)
    .with_context(|| format!("Failed to bind {server_address}"))?
    .run()
    .await
    .context("Server error")?;

    Ok(())
}
