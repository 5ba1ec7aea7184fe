use dotenvy::dotenv;
use storefront::{
    Result, Storefront,
    config,
    core::{BrowseView, pricing},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings (config.toml + environment overrides)
    let settings = config::load_settings()
        .inspect_err(|e| error!("Critical error loading configuration: {}", e))?;
    info!("Successfully processed storefront configuration.");

    // 4. Build the catalog once for the process lifetime
    let storefront = Storefront::from_settings(&settings);
    for (category, count) in storefront.category_facets() {
        info!(%category, count, "Category facet");
    }

    // 5. Serve the landing listing
    let session = storefront.browse();
    let page = storefront.query(session.request()).await;
    let view = BrowseView::from_page(&page);

    info!(
        total = view.total_products,
        pages = view.total_pages,
        show_pagination = view.show_pagination,
        "{} products found",
        view.total_products
    );
    for product in &page.products {
        info!(
            id = product.id,
            category = %product.category,
            in_stock = product.in_stock,
            "{}: {}",
            product.name,
            pricing::format_price(pricing::final_price(product))
        );
    }

    Ok(())
}
