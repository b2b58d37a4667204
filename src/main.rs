use resource_library::config::Config;
use resource_library::lifecycle::{setup_tracing, LogFailure, ResourceApp};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the defaults apply.
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env()?;
    info!(backend = ?config.backend, strategy = ?config.mutation_strategy(), "Starting");

    let mut app = ResourceApp::from_config(&config);

    let span = tracing::info_span!("initial_load");
    let loaded = app.start().instrument(span).await.log_failure("Initial load");

    if loaded.is_some() {
        for resource in app.gallery.items() {
            info!(id = %resource.id, title = %resource.title, "Gallery");
        }

        let view = app.manage.view();
        info!(
            page = view.page,
            total_pages = view.total_pages,
            matches = view.total_matches,
            "Management page"
        );
        for resource in &view.items {
            info!(id = %resource.id, title = %resource.title, source = ?resource.source, "Row");
        }

        app.gallery.on_search_change("programacion");
        info!(matches = app.gallery.items().len(), search = app.gallery.search(), "Gallery search");
    }

    app.shutdown().await?;
    info!("Done");
    Ok(())
}
