//! Chooses and prepares the store behind every resource

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use cms_api::ContentStores;
use cms_core::domain::{
    AboutSection, Branch, CalculatorConfig, MenuItem, NewsItem, Page, Slide, Stat, TeamMember,
};
use cms_core::repositories::{MenuRepository, PageRepository};
use cms_infrastructure::memory::seed;
use cms_infrastructure::{
    create_pool, run_migrations, MemoryStore, PgMenuRepository, PgPageRepository, UpstreamClient,
    UpstreamStore,
};
use cms_shared::config::{AppConfig, StorageBackend};

pub async fn content_stores(config: &AppConfig) -> anyhow::Result<ContentStores> {
    let seed_data = config.storage.seed_demo_data;
    let (pages, menu) = page_and_menu_stores(config).await?;

    let upstream = UpstreamClient::new(&config.upstream.base_url, config.upstream.timeout_seconds)
        .context("Failed to build upstream client")?;
    info!("Upstream backend at {}", upstream.base_url());

    Ok(ContentStores {
        slides: Arc::new(memory_store::<Slide>(seed_data, seed::demo_slides)),
        news: Arc::new(memory_store::<NewsItem>(seed_data, seed::demo_news)),
        calculators: Arc::new(memory_store::<CalculatorConfig>(
            seed_data,
            seed::demo_calculators,
        )),
        branches: Arc::new(UpstreamStore::<Branch>::new(upstream.clone())),
        team: Arc::new(UpstreamStore::<TeamMember>::new(upstream.clone())),
        stats: Arc::new(UpstreamStore::<Stat>::new(upstream.clone())),
        about: Arc::new(UpstreamStore::<AboutSection>::new(upstream)),
        pages,
        menu,
    })
}

fn memory_store<E>(seed_data: bool, demo: fn() -> Vec<E>) -> MemoryStore<E>
where
    E: cms_core::domain::Record,
{
    if seed_data {
        MemoryStore::with_records(demo())
    } else {
        MemoryStore::new()
    }
}

async fn page_and_menu_stores(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn PageRepository>, Arc<dyn MenuRepository>)> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Pages and menu kept in memory; changes are lost on restart");
            let pages = memory_store::<Page>(config.storage.seed_demo_data, seed::demo_pages);
            let menu = memory_store::<MenuItem>(config.storage.seed_demo_data, seed::demo_menu);
            Ok((Arc::new(pages), Arc::new(menu)))
        }
        StorageBackend::Postgres => {
            let db = &config.database;
            let url = db
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;

            info!("Connecting to database...");
            let pool = create_pool(
                url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_seconds,
            )
            .await
            .context("Failed to connect to database")?;
            info!("Database connection established.");

            if db.run_migrations {
                run_migrations(&pool)
                    .await
                    .context("Failed to run migrations")?;
            }

            Ok((
                Arc::new(PgPageRepository::new(pool.clone())),
                Arc::new(PgMenuRepository::new(pool)),
            ))
        }
    }
}
