use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::criteria::RawProductFilter;
use business::domain::product::model::ProductDetails;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::list_featured::ListFeaturedProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CoffeePageResponse, CoffeeRequest, CoffeeResponse};
use crate::api::tags::ApiTags;

pub struct CoffeeApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    list_featured_use_case: Arc<dyn ListFeaturedProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl CoffeeApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        list_featured_use_case: Arc<dyn ListFeaturedProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            list_featured_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.trim()
        .parse::<i64>()
        .map(ProductId::new)
        .map_err(|_| ErrorResponse::new("ValidationError", "product.invalid_id"))
}

/// Coffee catalog API
///
/// Filtered browsing plus create, read, update and delete of catalog coffees.
#[OpenApi]
impl CoffeeApi {
    /// Search the catalog
    ///
    /// Every filter is optional and they combine with AND. Enum filters are
    /// matched case-insensitively; `sortBy` accepts name, price, roastDate,
    /// acidityLevel, bodyLevel or createdAt. Pages are zero-based.
    #[oai(path = "/coffees", method = "get", tag = "ApiTags::Coffees")]
    #[allow(clippy::too_many_arguments)]
    async fn list_coffees(
        &self,
        keyword: Query<Option<String>>,
        #[oai(name = "roastLevel")] roast_level: Query<Option<String>>,
        #[oai(name = "caffeineType")] caffeine_type: Query<Option<String>>,
        #[oai(name = "originType")] origin_type: Query<Option<String>>,
        #[oai(name = "minAcidity")] min_acidity: Query<Option<i32>>,
        #[oai(name = "maxAcidity")] max_acidity: Query<Option<i32>>,
        #[oai(name = "minBody")] min_body: Query<Option<i32>>,
        #[oai(name = "maxBody")] max_body: Query<Option<i32>>,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        #[oai(name = "sortBy")] sort_by: Query<Option<String>>,
        #[oai(name = "sortDirection")] sort_direction: Query<Option<String>>,
    ) -> ListCoffeesResponse {
        let filter = RawProductFilter {
            keyword: keyword.0,
            roast_level: roast_level.0,
            caffeine_type: caffeine_type.0,
            origin_type: origin_type.0,
            min_acidity: min_acidity.0,
            max_acidity: max_acidity.0,
            min_body: min_body.0,
            max_body: max_body.0,
            page: page.0,
            size: size.0,
            sort_by: sort_by.0,
            sort_direction: sort_direction.0,
        };

        match self
            .list_use_case
            .execute(ListProductsParams { filter })
            .await
        {
            Ok(page) => ListCoffeesResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListCoffeesResponse::BadRequest(json),
                    _ => ListCoffeesResponse::ServiceUnavailable(json),
                }
            }
        }
    }

    /// List featured coffees
    ///
    /// Every coffee flagged as featured, ordered by name.
    #[oai(path = "/coffees/featured", method = "get", tag = "ApiTags::Coffees")]
    async fn list_featured_coffees(&self) -> ListFeaturedCoffeesResponse {
        match self.list_featured_use_case.execute().await {
            Ok(products) => ListFeaturedCoffeesResponse::Ok(Json(
                products.into_iter().map(CoffeeResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListFeaturedCoffeesResponse::ServiceUnavailable(json)
            }
        }
    }

    /// Get a coffee by ID
    #[oai(path = "/coffees/:id", method = "get", tag = "ApiTags::Coffees")]
    async fn get_coffee(&self, id: Path<String>) -> GetCoffeeResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetCoffeeResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(Some(product)) => GetCoffeeResponse::Ok(Json(product.into())),
            Ok(None) => GetCoffeeResponse::NotFound(ErrorResponse::new(
                "NotFound",
                "product.not_found",
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCoffeeResponse::ServiceUnavailable(json)
            }
        }
    }

    /// Create a coffee
    ///
    /// The id is assigned by the store and returned in the response.
    #[oai(path = "/coffees", method = "post", tag = "ApiTags::Coffees")]
    async fn create_coffee(&self, body: Json<CoffeeRequest>) -> CreateCoffeeResponse {
        let result = match ProductDetails::try_from(body.0) {
            Ok(details) => {
                self.create_use_case
                    .execute(CreateProductParams { details })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => CreateCoffeeResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCoffeeResponse::BadRequest(json),
                    _ => CreateCoffeeResponse::ServiceUnavailable(json),
                }
            }
        }
    }

    /// Replace a coffee
    ///
    /// Every attribute is overwritten. Unknown ids answer 404 and nothing is
    /// created.
    #[oai(path = "/coffees/:id", method = "put", tag = "ApiTags::Coffees")]
    async fn update_coffee(
        &self,
        id: Path<String>,
        body: Json<CoffeeRequest>,
    ) -> UpdateCoffeeResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateCoffeeResponse::BadRequest(json),
        };

        let result = match ProductDetails::try_from(body.0) {
            Ok(details) => {
                self.update_use_case
                    .execute(UpdateProductParams { id, details })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => UpdateCoffeeResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCoffeeResponse::BadRequest(json),
                    404 => UpdateCoffeeResponse::NotFound(json),
                    _ => UpdateCoffeeResponse::ServiceUnavailable(json),
                }
            }
        }
    }

    /// Delete a coffee
    #[oai(path = "/coffees/:id", method = "delete", tag = "ApiTags::Coffees")]
    async fn delete_coffee(&self, id: Path<String>) -> DeleteCoffeeResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteCoffeeResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteCoffeeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCoffeeResponse::NotFound(json),
                    _ => DeleteCoffeeResponse::ServiceUnavailable(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCoffeesResponse {
    #[oai(status = 200)]
    Ok(Json<CoffeePageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListFeaturedCoffeesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CoffeeResponse>>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCoffeeResponse {
    #[oai(status = 200)]
    Ok(Json<CoffeeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCoffeeResponse {
    #[oai(status = 201)]
    Created(Json<CoffeeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCoffeeResponse {
    #[oai(status = 200)]
    Ok(Json<CoffeeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCoffeeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
