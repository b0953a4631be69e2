use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductRecord};
use business::domain::product::pagination::PageWindow;
use business::domain::product::predicate::{ProductClause, ProductPredicate};
use business::domain::product::repository::ProductRepository;
use business::domain::product::sort::{ProductOrdering, SortDirection, SortField};
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use crate::db::map_sqlx_error;

const PRODUCT_COLUMNS: &str = "id, name, description, image_url, price, weight_grams, stock_quantity, roast_level, acidity_level, body_level, caffeine_type, origin_type, origin_country, origin_region, roast_date, flavor_notes, brewing_recommendation, is_featured, is_available, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes `LIKE` metacharacters so the keyword is matched literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Appends the predicate as a `WHERE` clause with every value bound.
fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &ProductPredicate) {
    for (i, clause) in predicate.clauses().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match clause {
            ProductClause::Keyword(needle) => {
                let pattern = format!("%{}%", escape_like(needle));
                builder
                    .push("(LOWER(name) LIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR LOWER(description) LIKE ")
                    .push_bind(pattern)
                    .push(")");
            }
            ProductClause::RoastLevel(level) => {
                builder.push("roast_level = ").push_bind(level.to_string());
            }
            ProductClause::CaffeineType(caffeine) => {
                builder.push("caffeine_type = ").push_bind(caffeine.to_string());
            }
            ProductClause::OriginType(origin) => {
                builder.push("origin_type = ").push_bind(origin.to_string());
            }
            ProductClause::AcidityAtLeast(min) => {
                builder.push("acidity_level >= ").push_bind(*min);
            }
            ProductClause::AcidityAtMost(max) => {
                builder.push("acidity_level <= ").push_bind(*max);
            }
            ProductClause::BodyAtLeast(min) => {
                builder.push("body_level >= ").push_bind(*min);
            }
            ProductClause::BodyAtMost(max) => {
                builder.push("body_level <= ").push_bind(*max);
            }
            ProductClause::Featured(featured) => {
                builder.push("is_featured = ").push_bind(*featured);
            }
        }
    }
}

/// Text columns sort by code point so results match the in-memory ordering
/// whatever the database collation is.
fn order_column(field: SortField) -> &'static str {
    match field {
        SortField::Name => "name COLLATE \"C\"",
        SortField::Price => "price",
        SortField::RoastDate => "roast_date",
        SortField::AcidityLevel => "acidity_level",
        SortField::BodyLevel => "body_level",
        SortField::CreatedAt => "created_at",
    }
}

/// Appends `ORDER BY`, always finishing with the id tie-break.
fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, ordering: &ProductOrdering) {
    let direction = match ordering.direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    builder
        .push(" ORDER BY ")
        .push(order_column(ordering.field))
        .push(" ")
        .push(direction)
        .push(", id ASC");
}

fn push_window(builder: &mut QueryBuilder<'_, Postgres>, window: PageWindow) {
    if let Some(limit) = window.limit {
        builder
            .push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }
    if window.offset > 0 {
        builder
            .push(" OFFSET ")
            .push_bind(i64::try_from(window.offset).unwrap_or(i64::MAX));
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn count_matching(&self, predicate: &ProductPredicate) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_predicate(&mut builder, predicate);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        u64::try_from(count).map_err(|_| RepositoryError::Persistence)
    }

    async fn fetch_matching(
        &self,
        predicate: &ProductPredicate,
        ordering: &ProductOrdering,
        window: PageWindow,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT ");
        builder.push(PRODUCT_COLUMNS).push(" FROM products");
        push_predicate(&mut builder, predicate);
        push_ordering(&mut builder, ordering);
        push_window(&mut builder, window);

        let entities = builder
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.try_into_domain()).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entity.map(|e| e.try_into_domain()).transpose()
    }

    async fn insert(&self, record: &ProductRecord) -> Result<ProductId, RepositoryError> {
        let details = &record.details;
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO products (name, description, image_url, price, weight_grams, stock_quantity,
                roast_level, acidity_level, body_level, caffeine_type, origin_type, origin_country,
                origin_region, roast_date, flavor_notes, brewing_recommendation, is_featured,
                is_available, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING id"#,
        )
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.image_url)
        .bind(&details.price)
        .bind(details.weight_grams)
        .bind(details.stock_quantity)
        .bind(details.roast_level.to_string())
        .bind(details.acidity_level)
        .bind(details.body_level)
        .bind(details.caffeine_type.to_string())
        .bind(details.origin_type.to_string())
        .bind(&details.origin_country)
        .bind(&details.origin_region)
        .bind(details.roast_date)
        .bind(&details.flavor_notes)
        .bind(&details.brewing_recommendation)
        .bind(details.is_featured)
        .bind(details.is_available)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(ProductId::new(id))
    }

    async fn replace(&self, id: ProductId, record: &ProductRecord) -> Result<(), RepositoryError> {
        let details = &record.details;
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                image_url = $4,
                price = $5,
                weight_grams = $6,
                stock_quantity = $7,
                roast_level = $8,
                acidity_level = $9,
                body_level = $10,
                caffeine_type = $11,
                origin_type = $12,
                origin_country = $13,
                origin_region = $14,
                roast_date = $15,
                flavor_notes = $16,
                brewing_recommendation = $17,
                is_featured = $18,
                is_available = $19,
                created_at = $20,
                updated_at = $21
            WHERE id = $1"#,
        )
        .bind(id.value())
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.image_url)
        .bind(&details.price)
        .bind(details.weight_grams)
        .bind(details.stock_quantity)
        .bind(details.roast_level.to_string())
        .bind(details.acidity_level)
        .bind(details.body_level)
        .bind(details.caffeine_type.to_string())
        .bind(details.origin_type.to_string())
        .bind(&details.origin_country)
        .bind(&details.origin_region)
        .bind(details.roast_date)
        .bind(&details.flavor_notes)
        .bind(&details.brewing_recommendation)
        .bind(details.is_featured)
        .bind(details.is_available)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
