use std::sync::Arc;

use chrono::Utc;

use logger::TracingLogger;
use persistence::db::run_migrations;
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::seed::seed_sample_products;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::list_featured::ListFeaturedProductsUseCaseImpl;
use business::application::product::query_executor::ProductQueryExecutor;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::repository::ProductRepository;

use crate::config::database_config::{CatalogStore, StorageConfig, init_database};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub coffee_api: crate::api::product::routes::CoffeeApi,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository: Arc<dyn ProductRepository> = match storage.store {
            CatalogStore::Postgres => {
                let pool = init_database(storage).await?;
                run_migrations(&pool, &storage.migrations_path).await?;
                Arc::new(ProductRepositoryPostgres::new(pool))
            }
            CatalogStore::Memory => Arc::new(ProductRepositoryInMemory::new()),
        };
        tracing::info!("Catalog store: {}", storage.store.as_str());

        if storage.seed_sample_data {
            seed_sample_products(product_repository.as_ref(), Utc::now().date_naive()).await?;
        }

        let health_api = crate::api::health::routes::Api::new(storage.store.as_str());

        // Catalog use cases
        let executor = ProductQueryExecutor::new(product_repository.clone());
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            executor: executor.clone(),
            logger: logger.clone(),
        });
        let list_featured_use_case = Arc::new(ListFeaturedProductsUseCaseImpl {
            executor,
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let coffee_api = crate::api::product::routes::CoffeeApi::new(
            list_use_case,
            list_featured_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        );

        Ok(Self {
            health_api,
            coffee_api,
        })
    }
}
